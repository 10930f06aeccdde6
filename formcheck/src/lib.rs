//! Form validation engine.
//!
//! Rules are discovered from the attributes of a bound element (and its form)
//! by a set of rule sources, filtered through a per-field mode policy, and run
//! against a [`Context`]. Failures are collected as deduplicated messages in a
//! [`Notification`], which can be turned into a [`Continuation`] for whatever
//! handles the submission.
//!
//! # Example
//!
//! ```
//! use formcheck::{Element, Form, Mode, Options, Target, Validator};
//!
//! let form = Form::new().data(
//!     "validation-options",
//!     r#"{"fields":[{"field":"Email","mode":"live"}]}"#,
//! );
//! let element = Element::input()
//!     .name("Email")
//!     .class("required email")
//!     .value("not-an-email");
//!
//! let options = Options::from_form(&form).unwrap();
//! let target = Target::for_element(element).with_form(form);
//! let notification = Validator::basic()
//!     .validate_with(&target, &options, Mode::Live)
//!     .unwrap();
//!
//! let continuation = notification.to_continuation();
//! assert!(!continuation.success);
//! assert_eq!(continuation.errors[0].message, "Invalid email address");
//! ```

pub mod context;
pub mod continuation;
pub mod element;
pub mod error;
mod hash;
pub mod message;
pub mod notification;
pub mod options;
pub mod rules;
pub mod sources;
pub mod target;
pub mod token;
pub mod validator;

pub use context::Context;
pub use continuation::{Continuation, ContinuationError};
pub use element::{Element, ElementRef, Form, FormRef};
pub use error::{ConfigError, Error, Result, RuleError};
pub use message::{Message, TemplateContext};
pub use notification::Notification;
pub use options::{FieldOptions, Mode, Options, RuleOptions};
pub use rules::{Rule, RuleRef};
pub use sources::RuleSource;
pub use target::Target;
pub use token::{Token, ValidationKeys};
pub use validator::Validator;

pub mod prelude {
    pub use crate::context::Context;
    pub use crate::element::{Element, Form};
    pub use crate::error::{ConfigError, RuleError};
    pub use crate::notification::Notification;
    pub use crate::options::{Mode, Options};
    pub use crate::rules::{Rule, RuleRef};
    pub use crate::sources::{CssAliasRegistry, RuleSource};
    pub use crate::target::Target;
    pub use crate::token::{Token, ValidationKeys};
    pub use crate::validator::Validator;
}
