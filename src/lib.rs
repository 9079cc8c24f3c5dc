//! Flowmaid — natural-language workflow descriptions to Mermaid diagrams.
//!
//! A description goes to a chat model ([`generate`]), the raw reply is
//! reduced to whitelisted diagram syntax ([`sanitize`]), and a theme/orientation
//! header is prepended ([`document`]) before the text is handed to a renderer.

pub mod document;
pub mod error;
pub mod export;
pub mod generate;
pub mod llm;
pub mod sanitize;
pub mod session;
pub mod store;
pub mod templates;
