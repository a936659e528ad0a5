//! UI layer for the slider demo
//!
//! - **Widgets** (`widgets`): iced widgets hosting the slider core
//! - **Theme** (`theme`): colors and container styles of the demo screen

pub mod theme;
pub mod widgets;
