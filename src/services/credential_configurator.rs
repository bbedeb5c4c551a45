use std::io::{self, Write};
use crate::config::constants::GOOGLE_APPLICATION_CREDENTIALS_ENV;
use crate::config::environment::Environment;

pub struct CredentialConfigurator;

impl CredentialConfigurator {
    /// Points credential discovery at `json_key_file` when one is given.
    ///
    /// The path is recorded verbatim; whether it exists is only found out when the credential
    /// is loaded. Without a path nothing is written to `env` or `out`.
    pub fn configure<W: Write>(json_key_file: Option<&str>, env: &mut Environment, out: &mut W) -> io::Result<()> {
        let Some(path) = json_key_file else {
            log::debug!("No key file given, using default credential discovery");
            return Ok(());
        };

        writeln!(out, "Setting {} to {}", GOOGLE_APPLICATION_CREDENTIALS_ENV, path)?;
        env.set(GOOGLE_APPLICATION_CREDENTIALS_ENV, path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_env() -> Environment {
        Environment::from_pairs([("HOME", "/home/probe"), ("GOOGLE_CLOUD_PROJECT", "demo")])
    }

    #[test]
    fn key_file_sets_credentials_variable_and_confirms() {
        let mut env = sample_env();
        let mut out = Vec::new();

        CredentialConfigurator::configure(Some("/tmp/creds.json"), &mut env, &mut out).unwrap();

        assert_eq!(env.get(GOOGLE_APPLICATION_CREDENTIALS_ENV), Some("/tmp/creds.json"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Setting GOOGLE_APPLICATION_CREDENTIALS to /tmp/creds.json\n"
        );
    }

    #[test]
    fn key_file_replaces_inherited_credentials_variable() {
        let mut env = Environment::from_pairs([(GOOGLE_APPLICATION_CREDENTIALS_ENV, "/old.json")]);

        CredentialConfigurator::configure(Some("/new.json"), &mut env, &mut Vec::new()).unwrap();

        assert_eq!(env.get(GOOGLE_APPLICATION_CREDENTIALS_ENV), Some("/new.json"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn no_key_file_leaves_environment_untouched_and_silent() {
        let mut env = sample_env();
        let mut out = Vec::new();

        CredentialConfigurator::configure(None, &mut env, &mut out).unwrap();

        assert_eq!(env, sample_env());
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn only_the_credentials_variable_changes(path in "[a-zA-Z0-9/._ -]{1,64}") {
            let before = sample_env();
            let mut env = before.clone();

            CredentialConfigurator::configure(Some(path.as_str()), &mut env, &mut Vec::new()).unwrap();

            prop_assert_eq!(env.get(GOOGLE_APPLICATION_CREDENTIALS_ENV), Some(path.as_str()));
            prop_assert_eq!(env.len(), before.len() + 1);
            prop_assert_eq!(env.get("HOME"), before.get("HOME"));
            prop_assert_eq!(env.get("GOOGLE_CLOUD_PROJECT"), before.get("GOOGLE_CLOUD_PROJECT"));
        }
    }
}
