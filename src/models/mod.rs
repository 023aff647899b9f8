//! # 数据模型模块
//!
//! 定义晶格常数、几何格式与表单字段的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`batch/` 和 `commands/` 使用
//! - 子模块: lattice, geometry, form

pub mod form;
pub mod geometry;
pub mod lattice;

pub use form::{FieldLayout, FieldSink, FormFields};
pub use geometry::{GeometryFormat, StructureFill};
pub use lattice::{LatticeKey, LatticeParameters, LatticeVector};
