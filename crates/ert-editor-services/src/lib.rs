//! `ert-editor-services` - language services for the ERT and DIST editors.
//!
//! The providers are plain functions over a line of text and a cursor position:
//!
//! - [`complete`] lists keyword completions,
//! - [`keyword_hover`] documents the keyword under the cursor,
//! - [`distribution_hover`] plots the prior defined on a DIST line.
//!
//! Plot colours and sizes come from [`ServiceConfig`], which hosts read from their settings
//! store with [`ServiceConfig::from_settings`].

pub mod completion;
pub mod config;
pub mod distribution;
pub mod error;
pub mod hover;
pub mod plot;
pub mod preview;
mod text;

pub use completion::{CompletionItem, CompletionItemKind, InsertTextRule, Range, complete};
pub use config::{CompletionOptions, ServiceConfig};
pub use distribution::Distribution;
pub use error::DistributionError;
pub use hover::{Hover, distribution_hover, hover, keyword_hover};
pub use plot::{PlotOptions, PlotTheme};
pub use preview::{AxisScale, DistributionPreview, Family, PreviewError, Sampling, preview_for_tokens};
pub use text::{word_at_position, word_until_position};
