//! Presentational shell for rendered fragments.
//!
//! The website consumes the generated HTML directly, so the utility classes
//! below must stay in sync with its stylesheet. Only markup lives here;
//! grouping and ordering are decided by the block builder.

pub const CODE_CLASS: &str = "bg-gray-100 px-1 py-0.5 rounded text-sm";
pub const LINK_CLASS: &str = "text-primary hover:text-blue-600 underline";
pub const HEADING_CLASS: &str = "text-lg font-medium text-gray-900 mt-4 mb-2";
pub const PARAGRAPH_CLASS: &str = "mb-4";
pub const LIST_CLASS: &str = "list-disc list-outside mb-4 space-y-1 pl-5";

pub const CALLOUT_CLASS: &str = "bg-gradient-to-r from-blue-50 to-indigo-50 border-l-4 border-blue-600 rounded-r-lg px-4 py-2 mb-4 shadow-sm";
pub const CALLOUT_LINE_CLASS: &str = "text-gray-800 font-medium leading-tight mb-0";

/// Information icon shown at the left of every blockquote callout.
pub const CALLOUT_ICON: &str = concat!(
    r#"<svg class="w-5 h-5 text-blue-500 mt-0.5" fill="currentColor" viewBox="0 0 20 20">"#,
    r#"<path fill-rule="evenodd" d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z" clip-rule="evenodd"></path>"#,
    "</svg>"
);

pub const LINE_BREAK: &str = "<br>\n";
