//! Form element model and validation engine.
//!
//! The core of a visual form builder: a closed set of typed field
//! definitions, each owning its construction defaults, validation rule,
//! and rendering contracts, composed into an ordered document that
//! serializes losslessly and validates submissions before they are stored.
//!
//! Rendering and persistence are external collaborators: renderers
//! implement [`FieldRenderer`], storage lives behind the workflow crate's
//! store trait.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use formforge::{validate_all, FieldId, FieldRegistry, FieldType, FormDocument};
//!
//! let registry = FieldRegistry::standard();
//! let mut doc = FormDocument::new();
//! let field = registry
//!     .construct(FieldType::Text, FieldId::generate())
//!     .expect("text is in the standard registry");
//! doc.insert_at(0, field);
//!
//! let outcome = validate_all(&doc, &HashMap::new());
//! assert!(outcome.is_valid());
//!
//! let encoded = doc.serialize().unwrap();
//! assert_eq!(FormDocument::deserialize(&encoded).unwrap(), doc);
//! ```

// Core error handling
pub mod error;

// Field model: types, instances, attribute schemas, registry, rendering
pub mod fields;

// Ordered form document
pub mod document;

// Submission validation
pub mod validate;

// Derived statistics
pub mod stats;

pub use document::FormDocument;
pub use error::{
    AttributeError, FieldNotFound, FormError, MalformedDocument, UnknownFieldType,
    ValidationFailed,
};
pub use fields::{
    CellValue, FieldAttributes, FieldDefinition, FieldId, FieldInstance, FieldRegistry,
    FieldRenderer, FieldType, InputContext, PropertiesUpdate, TableAttributes,
};
pub use stats::FormStats;
pub use validate::{validate_all, ValidationOutcome};
