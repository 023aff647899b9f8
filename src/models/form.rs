//! # 表单字段模型
//!
//! 解析结果最终写入网页表单的输入字段。字段名由模板、数据集编号和子集编号
//! 组合而成，例如 `id_lattice_constant_a_1_2`。
//!
//! - `FieldLayout`: 字段命名规则
//! - `FieldSink`: 字段写入接口
//! - `FormFields`: 以有序映射保存字段值的实现，可序列化为 JSON
//!
//! ## 依赖关系
//! - 被 `batch/router.rs` 和 `commands/` 使用
//! - 使用 `models/lattice.rs`

use super::lattice::LatticeKey;
use serde::Serialize;
use std::collections::BTreeMap;

/// 字段写入接口
pub trait FieldSink {
    /// 写入字段值，同名字段后写覆盖先写
    fn set_field(&mut self, name: &str, value: &str);
}

/// 字段值集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields {
    fields: BTreeMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldSink for FormFields {
    fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }
}

/// 字段命名规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// 所有字段名的前缀
    pub prefix: String,
    /// 数据集编号
    pub dataset: usize,
}

impl FieldLayout {
    pub fn new(dataset: usize) -> Self {
        FieldLayout {
            prefix: "id_".to_string(),
            dataset,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn name(&self, stem: &str, subset: usize) -> String {
        format!("{}{}_{}_{}", self.prefix, stem, self.dataset, subset)
    }

    pub fn lattice_constant(&self, key: LatticeKey, subset: usize) -> String {
        self.name(&format!("lattice_constant_{}", key), subset)
    }

    pub fn atomic_coordinates(&self, subset: usize) -> String {
        self.name("atomic_coordinates", subset)
    }

    pub fn geometry_format(&self, subset: usize) -> String {
        self.name("geometry_format", subset)
    }

    pub fn datapoints(&self, subset: usize) -> String {
        self.name("datapoints", subset)
    }

    /// 数据点上传的原始文件名
    pub fn import_file_name(&self, subset: usize) -> String {
        self.name("import_file_name", subset)
    }

    /// 结构文件上传的原始文件名
    pub fn import_file_name_atomic(&self, subset: usize) -> String {
        self.name("import_file_name_atomic", subset)
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        FieldLayout::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        let layout = FieldLayout::new(2);
        assert_eq!(
            layout.lattice_constant(LatticeKey::Alpha, 3),
            "id_lattice_constant_alpha_2_3"
        );
        assert_eq!(layout.atomic_coordinates(1), "id_atomic_coordinates_2_1");
        assert_eq!(layout.geometry_format(4), "id_geometry_format_2_4");
        assert_eq!(layout.datapoints(1), "id_datapoints_2_1");
        assert_eq!(layout.import_file_name(1), "id_import_file_name_2_1");
        assert_eq!(
            layout.import_file_name_atomic(1),
            "id_import_file_name_atomic_2_1"
        );
    }

    #[test]
    fn test_custom_prefix() {
        let layout = FieldLayout::new(1).with_prefix("");
        assert_eq!(layout.datapoints(2), "datapoints_1_2");
    }

    #[test]
    fn test_form_fields_last_write_wins() {
        let mut fields = FormFields::new();
        fields.set_field("id_datapoints_1_1", "old");
        fields.set_field("id_datapoints_1_1", "new");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("id_datapoints_1_1"), Some("new"));
    }

    #[test]
    fn test_form_fields_serialize_as_map() {
        let mut fields = FormFields::new();
        fields.set_field("b", "2");
        fields.set_field("a", "1");

        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }
}
