use crate::declaration::{DeclarationSet, NetworkDeclaration};
use crate::error::{ConfigError, ConfigResult};
use crate::profile::{Connection, NetworkProfile, Sender};
use crate::provider::{EnvSource, ProcessEnv, ProviderRegistry};
use chainsmith_utils::logging::{get_logger, LogCategory, LogLevel};

/// Resolves environment names against the declaration table
///
/// Resolution is a synchronous, deterministic lookup-and-validate pass: the
/// only side effect is reading secrets through the injected [`EnvSource`],
/// and two calls with the same name and unchanged environment state return
/// equal profiles. The resolver never opens a connection.
pub struct ConfigResolver {
    declarations: DeclarationSet,
    registry: ProviderRegistry,
    env: Box<dyn EnvSource>,
}

impl ConfigResolver {
    pub fn new(declarations: DeclarationSet, registry: ProviderRegistry) -> Self {
        Self {
            declarations,
            registry,
            env: Box::new(ProcessEnv),
        }
    }

    /// Replace the environment lookup, used by tests and embedders
    pub fn with_env_source(mut self, env: Box<dyn EnvSource>) -> Self {
        self.env = env;
        self
    }

    pub fn declarations(&self) -> &DeclarationSet {
        &self.declarations
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve one environment to a validated, immutable profile
    pub fn resolve(&self, name: &str) -> ConfigResult<NetworkProfile> {
        let declaration =
            self.declarations
                .effective(name)
                .ok_or_else(|| ConfigError::UnknownEnvironment {
                    name: name.to_string(),
                })?;

        let profile = self.build_profile(name, &declaration)?;
        profile.validate()?;

        if let Some(logger) = get_logger() {
            let _ = logger.log_with_fields(
                LogLevel::Debug,
                LogCategory::Config,
                "environment resolved",
                &[
                    ("environment", name.into()),
                    ("chain_id", profile.chain_id.into()),
                ],
            );
        }

        Ok(profile)
    }

    fn build_profile(
        &self,
        name: &str,
        declaration: &NetworkDeclaration,
    ) -> ConfigResult<NetworkProfile> {
        let chain_id = declaration
            .chain_id
            .ok_or_else(|| invalid(name, "chain_id is not declared"))?;
        let gas_limit = declaration
            .gas_limit
            .ok_or_else(|| invalid(name, "gas_limit is not declared"))?;
        let gas_price = declaration
            .gas_price
            .ok_or_else(|| invalid(name, "gas_price is not declared"))?;

        let (connection, sender) = match &declaration.provider {
            Some(provider_id) => {
                if declaration.host.is_some() || declaration.port.is_some() {
                    return Err(invalid(
                        name,
                        "declares both a static endpoint and a credential provider",
                    ));
                }
                if declaration.from.is_some() {
                    return Err(invalid(
                        name,
                        "declares both a sender address and a credential provider",
                    ));
                }

                let provider = self.registry.get(provider_id).ok_or_else(|| {
                    invalid(
                        name,
                        &format!(
                            "references unregistered credential provider '{}'",
                            provider_id
                        ),
                    )
                })?;

                let credential = provider.provide(name, self.env.as_ref())?;
                (
                    Connection::Endpoint {
                        url: credential.endpoint_url,
                    },
                    Sender::Derived {
                        provider: provider_id.clone(),
                    },
                )
            }
            None => {
                let host = declaration
                    .host
                    .clone()
                    .ok_or_else(|| invalid(name, "host is not declared and no provider is set"))?;
                let port = declaration
                    .port
                    .ok_or_else(|| invalid(name, "port is not declared and no provider is set"))?;
                let from = declaration
                    .from
                    .clone()
                    .ok_or_else(|| invalid(name, "sender address is not declared"))?;

                (Connection::Static { host, port }, Sender::Address(from))
            }
        };

        Ok(NetworkProfile {
            name: name.to_string(),
            connection,
            chain_id,
            gas_limit,
            gas_price,
            sender,
        })
    }
}

fn invalid(environment: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidProfile {
        environment: environment.to_string(),
        reason: reason.to_string(),
    }
}
