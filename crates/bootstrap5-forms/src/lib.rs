//! # bootstrap5-forms
//!
//! The form object model the Bootstrap 5 renderers read: widgets, bound
//! fields, forms, formsets, flash messages and paginator pages. Every type
//! is plain serializable data, so it can be built in Rust or handed over
//! through a template context.

pub mod bound_field;
pub mod form;
pub mod formset;
pub mod messages;
pub mod paginator;
pub mod widgets;

pub use bound_field::{BoundField, FormState};
pub use form::{Field, Form, NON_FIELD_ERRORS};
pub use formset::FormSet;
pub use messages::{Message, MessageLevel};
pub use paginator::{Page, Paginator};
pub use widgets::{Choice, ChoiceEntry, ChoiceStyle, FieldValue, Widget, WidgetKind};
