//! Textual patch of the generated Vite configuration.
//!
//! The patch is a pure `&str -> String` transform. It checks the marker
//! count before producing any output, so a caller that only writes on `Ok`
//! can never leave a half-patched file behind.

use crate::domain::error::DomainError;

/// Literal token that opens the plugins array in `create vite` output.
pub const PLUGINS_MARKER: &str = "plugins: [";

/// Import line prepended for the Tailwind Vite plugin.
pub const TAILWIND_IMPORT: &str = "import tailwindcss from '@tailwindcss/vite';\n";

/// Plugin call inserted as the first entry of the plugins array.
pub const TAILWIND_PLUGIN_CALL: &str = "\n    tailwindcss(),";

/// Registers the Tailwind plugin in a Vite config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailwindVitePatch;

impl TailwindVitePatch {
    /// Apply the patch to `source`, the contents of `file_name`.
    ///
    /// Requires exactly one occurrence of [`PLUGINS_MARKER`].
    pub fn apply(&self, file_name: &str, source: &str) -> Result<String, DomainError> {
        match source.matches(PLUGINS_MARKER).count() {
            0 => {
                return Err(DomainError::PatchMarkerMissing {
                    file: file_name.into(),
                    marker: PLUGINS_MARKER,
                });
            }
            1 => {}
            count => {
                return Err(DomainError::PatchMarkerAmbiguous {
                    file: file_name.into(),
                    marker: PLUGINS_MARKER,
                    count,
                });
            }
        }

        let mut patched = String::with_capacity(
            TAILWIND_IMPORT.len() + source.len() + TAILWIND_PLUGIN_CALL.len(),
        );
        patched.push_str(TAILWIND_IMPORT);
        patched.push_str(&source.replacen(
            PLUGINS_MARKER,
            &format!("{PLUGINS_MARKER}{TAILWIND_PLUGIN_CALL}"),
            1,
        ));
        Ok(patched)
    }
}
