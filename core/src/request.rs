//! Typed operation requests.
//!
//! A [`ParsedRequest`] is a loose bag of strings. [`Request::from_parsed`]
//! converts it once into a closed enum whose variants carry per-operation
//! parameter structs, so handlers never look flags up by name.

use std::fmt;
use std::str::FromStr;

use crate::{ParseError, ParsedRequest};

/// Digest algorithms accepted by `hash --algo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// All algorithms, in the order they are listed to users.
    pub const ALL: [HashAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Command-line spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.as_str() == s)
            .ok_or_else(|| ParseError::InvalidChoice {
                flag: "algo".to_string(),
                value: s.to_string(),
                allowed: Self::ALL.iter().map(|a| a.as_str().to_string()).collect(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParams {
    pub algorithm: HashAlgorithm,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParams {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtParams {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParams {
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParams {
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsParams {
    pub host: String,
    pub record: String,
}

/// One variant per (command, subcommand) pair of the toolbox schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    GenerateId,
    Hash(HashParams),
    EncodeBase64(TextParams),
    DecodeBase64(TextParams),
    DecodeJwt(JwtParams),
    BeautifyJson(InputParams),
    BeautifyYaml(InputParams),
    Ping(HostParams),
    DnsLookup(DnsParams),
}

impl Request {
    /// Converts a validated command line into a typed request.
    ///
    /// # Errors
    ///
    /// Only fails when `parsed` was produced against a schema that does not
    /// match the toolbox (an unknown pair, a missing flag or a bad algorithm).
    ///
    /// # Examples
    ///
    /// ```
    /// use toolbox_core::*;
    ///
    /// let Invocation::Run(parsed) =
    ///     parse_args(toolbox_schema(), ["decode", "jwt", "--token", "a.b.c"]).unwrap()
    /// else {
    ///     unreachable!()
    /// };
    /// assert_eq!(
    ///     Request::from_parsed(&parsed).unwrap(),
    ///     Request::DecodeJwt(JwtParams { token: "a.b.c".into() })
    /// );
    /// ```
    pub fn from_parsed(parsed: &ParsedRequest) -> Result<Self, ParseError> {
        let field = |flag: &str| {
            parsed
                .get(flag)
                .map(str::to_string)
                .ok_or_else(|| ParseError::MissingRequiredFlag {
                    scope: parsed.path(),
                    flag: flag.to_string(),
                })
        };

        let request = match (parsed.command(), parsed.subcommand()) {
            ("uuid", None) => Self::GenerateId,
            ("hash", None) => Self::Hash(HashParams {
                algorithm: field("algo")?.parse()?,
                text: field("text")?,
            }),
            ("encode", Some("base64")) => Self::EncodeBase64(TextParams {
                text: field("text")?,
            }),
            ("decode", Some("base64")) => Self::DecodeBase64(TextParams {
                text: field("text")?,
            }),
            ("decode", Some("jwt")) => Self::DecodeJwt(JwtParams {
                token: field("token")?,
            }),
            ("beautify", Some("json")) => Self::BeautifyJson(InputParams {
                input: field("input")?,
            }),
            ("beautify", Some("yaml")) => Self::BeautifyYaml(InputParams {
                input: field("input")?,
            }),
            ("ping", None) => Self::Ping(HostParams {
                host: field("host")?,
            }),
            ("dns", None) => Self::DnsLookup(DnsParams {
                host: field("host")?,
                record: field("record")?,
            }),
            _ => {
                return Err(ParseError::UnknownCommand {
                    command: parsed.path(),
                });
            }
        };
        Ok(request)
    }

    /// Name of the operation, used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::GenerateId => "generate-id",
            Self::Hash(_) => "hash",
            Self::EncodeBase64(_) => "encode-base64",
            Self::DecodeBase64(_) => "decode-base64",
            Self::DecodeJwt(_) => "decode-jwt",
            Self::BeautifyJson(_) => "beautify-json",
            Self::BeautifyYaml(_) => "beautify-yaml",
            Self::Ping(_) => "ping",
            Self::DnsLookup(_) => "dns-lookup",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{Invocation, parse_args, toolbox_schema};

    fn parse(args: &[&str]) -> ParsedRequest {
        match parse_args(toolbox_schema(), args) {
            Ok(Invocation::Run(parsed)) => parsed,
            other => panic!("expected a request for {args:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_algorithm_from_str() {
        assert_eq!("sha256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        let err = "blowfish".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidChoice);
    }

    #[test]
    fn test_hash_request_is_typed() {
        let request =
            Request::from_parsed(&parse(&["hash", "--algo", "sha512", "--text", "x"])).unwrap();
        assert_eq!(
            request,
            Request::Hash(HashParams {
                algorithm: HashAlgorithm::Sha512,
                text: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_dns_request_is_typed() {
        let request = Request::from_parsed(&parse(&[
            "dns",
            "--host",
            "example.com",
            "--record",
            "mx",
        ]))
        .unwrap();
        assert_eq!(
            request,
            Request::DnsLookup(DnsParams {
                host: "example.com".to_string(),
                record: "mx".to_string(),
            })
        );
    }

    #[test]
    fn test_every_schema_pair_maps_to_a_distinct_request() {
        let schema = toolbox_schema();
        let mut operations = HashSet::new();

        for command in &schema.commands {
            let subcommands: Vec<Option<&str>> = if command.requires_subcommand() {
                command.subcommand_names().into_iter().map(Some).collect()
            } else {
                vec![None]
            };

            for sub in subcommands {
                let mut args = vec![command.command.clone()];
                args.extend(sub.map(str::to_string));
                for flag in command.flags_for(sub).unwrap() {
                    args.push(flag.token());
                    let value = flag
                        .value_type
                        .choices()
                        .and_then(|c| c.first().cloned())
                        .unwrap_or_else(|| "value".to_string());
                    args.push(value);
                }

                let Ok(Invocation::Run(parsed)) = parse_args(schema, &args) else {
                    panic!("schema pair did not parse: {args:?}");
                };
                let request = Request::from_parsed(&parsed)
                    .unwrap_or_else(|e| panic!("no request for {args:?}: {e}"));
                assert!(operations.insert(request.operation()), "{args:?}");
            }
        }

        assert_eq!(operations.len(), 9);
    }
}
