//! # style-panel
//!
//! The engine-independent core of a style-editor panel: the controls a user
//! edits to change the visual style of a selected element.
//!
//! Every control reads one immutable style snapshot, in which each property
//! carries a value and a provenance (`local`, `remote`, `preset` or
//! `default`). Writes go through ordered operation lists that the style engine
//! applies atomically, so multi-property edits such as the linked overflow
//! axes or the advanced typography reset publish as a single commit.
//!
//! ## Core Systems
//!
//! - **[`style`]**: properties, values, snapshots and provenance resolution
//! - **[`update`]**: the engine contract, property bindings and batch sessions
//! - **[`store`]**: an in-memory engine with instances, tokens, presets and undo
//! - **[`css`]**: tokenizer and parser for typed values and declaration lists
//! - **[`controls`]**: toggle groups, text inputs and reset buttons
//! - **[`sections`]**: the Size, Typography and Outline sections
//! - **[`event`]**: pointer events and modifier keys
//! - **[`testing`]**: a recording engine for headless tests
//!
//! ## Example
//!
//! ```
//! use style_panel::sections::size;
//! use style_panel::store::StyleStore;
//! use style_panel::style::{StyleProperty, StyleSource, StyleValue};
//! use style_panel::update::StyleEngine;
//!
//! let store = StyleStore::new();
//! let button = store.add_instance();
//! store.select(button).unwrap();
//! let before = store.revision();
//!
//! size::set_overflow(&store, "hidden");
//!
//! let style = store.current_style();
//! assert_eq!(style.value(StyleProperty::OverflowY), Some(&StyleValue::keyword("hidden")));
//! assert_eq!(size::overflow_source(&style), StyleSource::Local);
//! assert_eq!(store.revision(), before + 1);
//! ```

// Data model
pub mod style;

// Write path
pub mod store;
pub mod update;

// Value syntax
pub mod css;

// Panel surface
pub mod controls;
pub mod event;
pub mod sections;

// Test support
pub mod testing;
