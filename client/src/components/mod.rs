//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the catalog grid, individual item cards, and the theme
//! control. Pages hand them loaded data through props.

pub mod item_card;
pub mod items_list;
pub mod theme_toggle;
