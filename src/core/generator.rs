//! Info class generation
//!
//! Renders the source text of the generated info type from two parsed
//! versions plus naming configuration. Rendering is a pure function of the
//! request; persisting the result lives in [`crate::core::writer`].

use crate::core::build_info;
use crate::core::error::{InfoGenError, InfoGenResult, VersionRole};
use crate::core::strings::is_valid_identifier;
use crate::core::version::{self, ParsedVersion};
use std::fmt;

/// Default name for the generated type when the caller does not override it.
pub const DEFAULT_CLASS_NAME: &str = "SmallRyeInfo";

/// Validated input for one generation run. Constructed fresh per invocation,
/// used once to render output text, and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub spec_version: ParsedVersion,
    pub impl_version: ParsedVersion,
    pub package_name: String,
    pub class_name: String,
}

impl GenerationRequest {
    /// Build a request from raw configuration strings.
    ///
    /// Both version strings must match the version grammar, the package name
    /// must be a dot-separated list of identifiers, and the class name must
    /// be an identifier. Nothing is coerced or partially accepted.
    pub fn from_raw(
        spec_version: &str,
        impl_version: &str,
        package_name: &str,
        class_name: &str,
    ) -> InfoGenResult<Self> {
        let spec_version = version::parse(spec_version).map_err(|source| {
            InfoGenError::MalformedVersion {
                role: VersionRole::Specification,
                source,
            }
        })?;
        let impl_version = version::parse(impl_version).map_err(|source| {
            InfoGenError::MalformedVersion {
                role: VersionRole::Implementation,
                source,
            }
        })?;
        validate_package_name(package_name)?;
        validate_class_name(class_name)?;

        Ok(Self {
            spec_version,
            impl_version,
            package_name: package_name.to_string(),
            class_name: class_name.to_string(),
        })
    }

    /// Namespace segments, outermost first.
    pub fn package_segments(&self) -> impl Iterator<Item = &str> {
        self.package_name.split('.')
    }
}

fn validate_package_name(package_name: &str) -> InfoGenResult<()> {
    if package_name.is_empty() {
        return Err(InfoGenError::InvalidRequest {
            field: "package name",
            message: "must not be empty".to_string(),
        });
    }
    for segment in package_name.split('.') {
        if !is_valid_identifier(segment) {
            return Err(InfoGenError::InvalidRequest {
                field: "package name",
                message: format!("segment \"{}\" is not a valid identifier", segment),
            });
        }
    }
    Ok(())
}

fn validate_class_name(class_name: &str) -> InfoGenResult<()> {
    if !is_valid_identifier(class_name) {
        return Err(InfoGenError::InvalidRequest {
            field: "class name",
            message: format!("\"{}\" is not a valid identifier", class_name),
        });
    }
    Ok(())
}

/// Render the artifact source for a validated request.
///
/// Deterministic: identical requests produce byte-identical output. The
/// rendered type is non-instantiable and all accessors are `const fn`s over
/// values baked in at generation time.
pub fn render(request: &GenerationRequest) -> String {
    ArtifactSource(request).to_string()
}

/// Constant returned by one generated accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessorValue {
    Int(u32),
    Flag(bool),
}

impl AccessorValue {
    fn type_name(self) -> &'static str {
        match self {
            Self::Int(_) => "u32",
            Self::Flag(_) => "bool",
        }
    }
}

impl fmt::Display for AccessorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Flag(value) => write!(f, "{}", value),
        }
    }
}

struct Accessor {
    name: &'static str,
    doc: &'static str,
    value: AccessorValue,
}

/// The fixed accessor surface of the generated type, in emission order.
fn accessors(request: &GenerationRequest) -> [Accessor; 9] {
    let spec = &request.spec_version;
    let imp = &request.impl_version;
    [
        Accessor {
            name: "spec_major_version",
            doc: "Get the specification major version.",
            value: AccessorValue::Int(spec.major),
        },
        Accessor {
            name: "spec_minor_version",
            doc: "Get the specification minor version.",
            value: AccessorValue::Int(spec.minor),
        },
        Accessor {
            name: "spec_micro_version",
            doc: "Get the specification micro version.",
            value: AccessorValue::Int(spec.micro),
        },
        Accessor {
            name: "is_spec_snapshot",
            doc: "Determine whether the specification is a snapshot.",
            value: AccessorValue::Flag(spec.snapshot),
        },
        Accessor {
            name: "impl_major_version",
            doc: "Get the implementation major version.",
            value: AccessorValue::Int(imp.major),
        },
        Accessor {
            name: "impl_minor_version",
            doc: "Get the implementation minor version.",
            value: AccessorValue::Int(imp.minor),
        },
        Accessor {
            name: "impl_micro_version",
            doc: "Get the implementation micro version.",
            value: AccessorValue::Int(imp.micro),
        },
        Accessor {
            name: "is_impl_snapshot",
            doc: "Determine whether the implementation is a snapshot.",
            value: AccessorValue::Flag(imp.snapshot),
        },
        Accessor {
            name: "info_version",
            doc: "Get the info class API version. Use this to determine which accessors are available.",
            value: AccessorValue::Int(build_info::info_api_version()),
        },
    ]
}

struct ArtifactSource<'a>(&'a GenerationRequest);

impl fmt::Display for ArtifactSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.0;
        writeln!(f, "// Generated by infogen. Do not edit.")?;
        writeln!(f)?;

        let segments: Vec<&str> = request.package_segments().collect();
        for (depth, segment) in segments.iter().enumerate() {
            writeln!(f, "{}pub mod {} {{", indent(depth), segment)?;
        }

        let pad = indent(segments.len());
        writeln!(f, "{pad}/// Information about the version of this module.")?;
        writeln!(f, "{pad}pub struct {} {{", request.class_name)?;
        writeln!(f, "{pad}    _private: (),")?;
        writeln!(f, "{pad}}}")?;
        writeln!(f)?;
        writeln!(f, "{pad}impl {} {{", request.class_name)?;
        for (index, accessor) in accessors(request).iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{pad}    /// {}", accessor.doc)?;
            writeln!(
                f,
                "{pad}    pub const fn {}() -> {} {{",
                accessor.name,
                accessor.value.type_name()
            )?;
            writeln!(f, "{pad}        {}", accessor.value)?;
            writeln!(f, "{pad}    }}")?;
        }
        writeln!(f, "{pad}}}")?;

        for depth in (0..segments.len()).rev() {
            writeln!(f, "{}}}", indent(depth))?;
        }
        Ok(())
    }
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}
