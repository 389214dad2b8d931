//! Shared constants for the checklist engine.
//!
//! Defaults reproduce the literals the checklist has always enforced, so an
//! empty configuration behaves exactly like the historical action.

/// Checklist version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Branch prefixes accepted by the naming rule.
pub const DEFAULT_BRANCH_PREFIXES: &[&str] = &["feature", "bugfix", "hotfix", "release"];

/// Path of the compliance document, relative to the repository root.
pub const DEFAULT_DOCUMENT_PATH: &str = "README.md";

/// Title line prefix every compliance document must start with.
pub const DEFAULT_TITLE_PREFIX: &str = "# ESB_";

/// Section markers the compliance document must contain, in template order.
pub const DEFAULT_REQUIRED_SECTIONS: &[&str] = &[
    "# ESB_",
    "## INFORMACIÓN DEL SERVICIO",
    "## Procedimiento de despliegue",
    "## ACCESO AL SERVICIO",
    "## CANALES - APLICACIONES",
    "## DEPENDENCIAS",
    "## DOCUMENTACION",
    "## SQL",
];

/// Superseded host fragment that must not appear in the document.
pub const DEFAULT_DEPRECATED_HOST: &str = "boc200";

/// Host fragment that replaces [`DEFAULT_DEPRECATED_HOST`].
pub const DEFAULT_REPLACEMENT_HOST: &str = "boc201";

/// Directory names that are never allowed in a service repository.
pub const DEFAULT_FORBIDDEN_DIRS: &[&str] = &["bd"];

/// Directory names the filesystem walk never descends into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// Organization that hosts the central configuration repository.
pub const DEFAULT_REGISTRY_OWNER: &str = "bocc-principal";

/// Central configuration repository.
pub const DEFAULT_REGISTRY_REPO: &str = "ESB_ACE12_General_Configs";

/// Properties file listing execution groups per service.
pub const DEFAULT_REGISTRY_PATH: &str =
    "ace-12-common-properties/esb-ace12-general-integration-servers.properties";

/// Git ref the central configuration is read from.
pub const DEFAULT_REGISTRY_REF: &str = "main";

/// Prefix of every service key in the central properties file.
pub const DEFAULT_REGISTRY_KEY_PREFIX: &str = "ESB_ACE12";

/// Organizational sub-prefix stripped from the service identifier.
pub const DEFAULT_SERVICE_SUB_PREFIX: &str = "ACE12_";

/// Phrase introducing the declared execution groups in the document.
pub const DEFAULT_GROUPS_PHRASE: &str = "desplegar en los grupos de ejecución:";

/// Reviewers allowed to approve promotions to quality and production.
pub const DEFAULT_AUTHORIZED_REVIEWERS: &[&str] = &["DRamirezM", "cdgomez", "acardenasm", "CAARIZA"];

/// Comment marker that grants an emergency exception.
pub const DEFAULT_EXCEPTION_MARKER: &str = "@bot aprobar excepción";

/// Branch transitions that require an authorized reviewer.
pub const DEFAULT_GATED_ROUTES: &[(&str, &str)] = &[("develop", "quality"), ("quality", "main")];

/// Source branch prefix of the emergency-exception route.
pub const DEFAULT_EXCEPTION_SOURCE_PREFIX: &str = "feature/";

/// Target branch of the emergency-exception route.
pub const DEFAULT_EXCEPTION_TARGET: &str = "develop";
