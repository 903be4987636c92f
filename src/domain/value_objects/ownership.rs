//! Ownership and permission normalization
//!
//! After the sync, the payload subdirectory gets a fixed owner/group and
//! permission mode so the containerized runtime can read the files no matter
//! what attributes the source tree carried or which account performed the
//! sync. Both `chown -R` and `chmod -R` are idempotent, which is what makes
//! re-running the pipeline after a partial failure safe.

use crate::error::{FerryError, FerryResult};

/// Fixed owner/group and octal mode applied to the remote payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipSpec {
    user: String,
    group: String,
    mode: u32,
}

impl OwnershipSpec {
    /// Build a spec, parsing `mode` as octal digits (e.g. "755")
    pub fn new(user: &str, group: &str, mode: &str) -> FerryResult<Self> {
        let user = valid_principal(user, "user")?;
        let group = valid_principal(group, "group")?;
        let parsed = u32::from_str_radix(mode, 8).map_err(|_| FerryError::InvalidOwnership {
            message: format!("mode '{}' is not octal (expected digits like 755)", mode),
        })?;
        if parsed > 0o7777 {
            return Err(FerryError::InvalidOwnership {
                message: format!("mode '{}' is out of range", mode),
            });
        }
        Ok(Self {
            user,
            group,
            mode: parsed,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Mode rendered back as octal digits
    pub fn mode_octal(&self) -> String {
        format!("{:o}", self.mode)
    }

    /// The remote normalization command for a payload path
    pub fn normalize_command(&self, payload_path: &str) -> String {
        let path = shell_quote(payload_path);
        format!(
            "chown -R {user}:{group} {path} && chmod -R {mode:o} {path}",
            user = self.user,
            group = self.group,
            mode = self.mode,
            path = path,
        )
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

fn valid_principal(value: &str, what: &str) -> FerryResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FerryError::InvalidOwnership {
            message: format!("{} must not be empty", what),
        });
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(FerryError::InvalidOwnership {
            message: format!("{} '{}' contains unsupported characters", what, value),
        });
    }
    Ok(value.to_string())
}
