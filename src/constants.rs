//! Fixed generation schema used throughout the imagegen tool.
//! Output locations, the generated-file header, and the constant sets are
//! data here rather than strings scattered through the emitters.

use crate::emitter::{ConstantDef, ConstantsFile};

/// Default name of the env declarations file.
pub const ENV_FILE: &str = ".env";

/// Security-scanners configuration document, relative to the repository root.
pub const SEC_SCAN_CONFIG_FILE: &str = "sec-scanners-config.yaml";

/// Header prepended to every generated source file.
pub const GENERATED_HEADER: &str = "// This file is generated by \"make generate\".\n\
                                    // Don't edit, update .env file and run make target generate.\n";

/// The image constants file of the main module.
pub const MAIN_CONSTANTS: ConstantsFile = ConstantsFile {
    path: "internal/images/images.go",
    package: "images",
    constants: &[
        ConstantDef::new("DefaultFluentBitExporterImage", "DEFAULT_FLUENTBIT_EXPORTER_IMAGE"),
        ConstantDef::new("DefaultFluentBitImage", "DEFAULT_FLUENTBIT_IMAGE"),
        ConstantDef::new("DefaultOTelCollectorImage", "DEFAULT_OTEL_COLLECTOR_IMAGE"),
        ConstantDef::new("DefaultSelfMonitorImage", "DEFAULT_SELFMONITOR_IMAGE"),
    ],
};

/// The image constants file of the testkit.
pub const TESTKIT_CONSTANTS: ConstantsFile = ConstantsFile {
    path: "test/testkit/images.go",
    package: "testkit",
    constants: &[ConstantDef::new("DefaultTelemetryGenImage", "DEFAULT_TEST_TELEMETRYGEN_IMAGE")],
};

/// Env keys whose values populate the protecode image list, in order.
/// The environment image comes first, the infrastructure images after it.
pub const PROTECODE_KEYS: &[&str] = &[
    "ENV_IMG",
    "DEFAULT_FLUENTBIT_EXPORTER_IMAGE",
    "DEFAULT_FLUENTBIT_IMAGE",
    "DEFAULT_OTEL_COLLECTOR_IMAGE",
    "DEFAULT_SELFMONITOR_IMAGE",
];

/// Paths the source-level scanners skip.
pub const SCAN_EXCLUDE_PATTERNS: &[&str] =
    &["**/mocks/**", "**/stubs/**", "**/test/**", "**/*_test.go"];
