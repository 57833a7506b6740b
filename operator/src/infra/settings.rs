//! Process settings loaded from `DEMO_OPERATOR_*` environment variables.

use anyhow::{Context, Result};
use operator_common::{ENV_PREFIX, OperatorSettings};

/// Load settings from the given environment pairs.
///
/// Unset variables fall back to their defaults.
///
/// # Errors
///
/// Returns an error if a variable is set but cannot be parsed.
pub fn load_settings<I>(vars: I) -> Result<OperatorSettings>
where
    I: IntoIterator<Item = (String, String)>,
{
    envy::prefixed(ENV_PREFIX)
        .from_iter(vars)
        .with_context(|| format!("invalid {ENV_PREFIX}* environment"))
}
