//! npm install argument construction
//!
//! Options are a typed struct with an ordered list of extra flags rather than
//! an arbitrary map: the flag order in the spawned command line is exactly
//! the declaration order here (`save`, `saveDev`, then caller extras).

use crate::utils::kebab::kebab_case;

/// Value carried by a single install flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// `true` emits a bare `--flag`; `false` omits the flag entirely.
    Bool(bool),
    /// Any other value emits a single `--flag='<value>'` argument.
    Value(String),
}

impl From<bool> for FlagValue {
    fn from(v: bool) -> Self {
        FlagValue::Bool(v)
    }
}

impl From<&str> for FlagValue {
    fn from(v: &str) -> Self {
        FlagValue::Value(v.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(v: String) -> Self {
        FlagValue::Value(v)
    }
}

/// Options forwarded to the npm process as `--flag` arguments.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Record as a production dependency (`--save`).
    pub save: bool,
    /// Record as a development dependency (`--save-dev`).
    pub save_dev: bool,
    /// Additional flags in the order they should appear, names in any
    /// casing (kebab-cased when emitted).
    pub extra_flags: Vec<(String, FlagValue)>,
}

impl InstallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub fn with_save_dev(mut self, save_dev: bool) -> Self {
        self.save_dev = save_dev;
        self
    }

    pub fn with_flag(mut self, name: &str, value: impl Into<FlagValue>) -> Self {
        self.extra_flags.push((name.to_string(), value.into()));
        self
    }

    /// The checker's view of these options.
    pub fn check_options(&self) -> crate::resolver::CheckOptions {
        crate::resolver::CheckOptions {
            save: self.save,
            save_dev: self.save_dev,
        }
    }

    /// All flags in emission order.
    fn flags(&self) -> Vec<(&str, FlagValue)> {
        let mut flags: Vec<(&str, FlagValue)> = vec![
            ("save", FlagValue::Bool(self.save)),
            ("saveDev", FlagValue::Bool(self.save_dev)),
        ];
        for (name, value) in &self.extra_flags {
            flags.push((name.as_str(), value.clone()));
        }
        flags
    }
}

/// Build the npm argument list for installing `dep`.
///
/// `["install", <dep>, --flags...]`, with false flags omitted, true flags
/// bare, and valued flags emitted as one `--flag='<value>'` argument.
pub fn build_args(dep: &str, options: &InstallOptions) -> Vec<String> {
    let mut args = vec!["install".to_string(), dep.to_string()];

    for (name, value) in options.flags() {
        let flag = format!("--{}", kebab_case(name));
        match value {
            FlagValue::Bool(false) => continue,
            FlagValue::Bool(true) => args.push(flag),
            FlagValue::Value(v) => args.push(format!("{}='{}'", flag, v)),
        }
    }

    args
}
