//! WHOIS text queries and response scraping.
//!
//! Plain TCP/43 queries; unknown TLDs go through IANA referral discovery.
//! Registration detection is a text heuristic, not a WHOIS RFC parser:
//! registry output varies too much per TLD for anything stricter, and the
//! verdict logic compensates with DNS signal redundancy.

use async_trait::async_trait;
use regex::Regex;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::{DomainHunterError, Result};

/// Phrases whose presence marks a WHOIS response as "no such domain"
const NEGATIVE_PHRASES: &[&str] = &[
    "no matching record",
    "no match",
    "not found",
    "no data found",
    "no entries found",
];

/// WHOIS lookup seam
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Fetch the raw WHOIS text for a full domain. May fail per-TLD; the
    /// caller treats failure as an unknown signal.
    async fn lookup(&self, domain: &str) -> Result<String>;
}

/// Registered-text heuristic: the response must contain the literal
/// substring "domain" and none of the negative phrases. Case-insensitive
/// over the whole response.
pub fn indicates_registered(whois_text: &str) -> bool {
    let lower = whois_text.to_lowercase();
    lower.contains("domain") && !NEGATIVE_PHRASES.iter().any(|p| lower.contains(p))
}

/// First-match field extraction over regex alternatives; each is optional
fn extract_field(text: &str, patterns: &[&str]) -> Option<String> {
    for pattern in patterns {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        if let Some(caps) = re.captures(text) {
            if let Some(value) = caps.get(1) {
                let value = value.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Registrar name, if present
pub fn extract_registrar(text: &str) -> Option<String> {
    extract_field(
        text,
        &[
            r"(?im)^\s*registrar:\s*(.+?)\s*$",
            r"(?im)^\s*registrar name:\s*(.+?)\s*$",
            r"(?im)^\s*sponsoring registrar:\s*(.+?)\s*$",
        ],
    )
}

/// Creation date as raw text, if present
pub fn extract_creation_date(text: &str) -> Option<String> {
    extract_field(
        text,
        &[
            r"(?im)^\s*creation date:\s*(.+?)\s*$",
            r"(?im)^\s*created(?: on)?:\s*(.+?)\s*$",
            r"(?im)^\s*registered(?: on)?:\s*(.+?)\s*$",
        ],
    )
}

/// Expiration date as raw text, if present
pub fn extract_expiration_date(text: &str) -> Option<String> {
    extract_field(
        text,
        &[
            r"(?im)^\s*registry expiry date:\s*(.+?)\s*$",
            r"(?im)^\s*expiration date:\s*(.+?)\s*$",
            r"(?im)^\s*expir(?:es|y date)(?: on)?:\s*(.+?)\s*$",
        ],
    )
}

/// WHOIS client over TCP/43
pub struct WhoisClient {
    timeout: Duration,
}

impl WhoisClient {
    pub fn new(query_timeout: Duration) -> Self {
        Self {
            timeout: query_timeout,
        }
    }

    /// Well-known WHOIS servers for high-usage TLDs; everything else goes
    /// through IANA discovery.
    fn server_for(tld: &str) -> Option<&'static str> {
        match tld {
            "com" | "net" => Some("whois.verisign-grs.com"),
            "org" => Some("whois.pir.org"),
            "io" => Some("whois.nic.io"),
            "ai" => Some("whois.nic.ai"),
            "co" => Some("whois.nic.co"),
            "me" => Some("whois.nic.me"),
            "app" | "dev" => Some("whois.nic.google"),
            "xyz" => Some("whois.nic.xyz"),
            "tr" => Some("whois.trabis.gov.tr"),
            _ => None,
        }
    }

    /// Ask IANA which server is authoritative for a TLD
    async fn discover_server(&self, tld: &str) -> Result<String> {
        let response = self.raw_query("whois.iana.org", tld).await?;
        response
            .lines()
            .map(str::trim)
            .find_map(|line| {
                let lower = line.to_lowercase();
                let value = if lower.starts_with("whois:") || lower.starts_with("refer:") {
                    line.splitn(2, ':').nth(1).map(str::trim)
                } else {
                    None
                };
                value.filter(|v| !v.is_empty()).map(str::to_string)
            })
            .ok_or_else(|| {
                DomainHunterError::probe(
                    tld,
                    format!("no WHOIS server known for TLD '{}'", tld),
                    Some("whois".to_string()),
                )
            })
    }

    async fn raw_query(&self, server: &str, query: &str) -> Result<String> {
        let addr = format!("{}:43", server);
        let secs = self.timeout.as_secs();

        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| DomainHunterError::timeout("WHOIS connect", secs))?
            .map_err(|e| {
                DomainHunterError::probe(
                    query,
                    format!("WHOIS connect to {} failed: {}", addr, e),
                    Some("whois".to_string()),
                )
            })?;

        timeout(
            self.timeout,
            stream.write_all(format!("{}\r\n", query).as_bytes()),
        )
        .await
        .map_err(|_| DomainHunterError::timeout("WHOIS write", secs))?
        .map_err(|e| {
            DomainHunterError::probe(
                query,
                format!("WHOIS write failed: {}", e),
                Some("whois".to_string()),
            )
        })?;

        let mut buf = Vec::new();
        timeout(self.timeout, stream.read_to_end(&mut buf))
            .await
            .map_err(|_| DomainHunterError::timeout("WHOIS read", secs))?
            .map_err(|e| {
                DomainHunterError::probe(
                    query,
                    format!("WHOIS read failed: {}", e),
                    Some("whois".to_string()),
                )
            })?;

        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl WhoisLookup for WhoisClient {
    async fn lookup(&self, domain: &str) -> Result<String> {
        let tld = domain
            .rsplit('.')
            .next()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                DomainHunterError::probe(domain, "domain has no TLD", Some("whois".to_string()))
            })?
            .to_lowercase();

        let server = match Self::server_for(&tld) {
            Some(server) => server.to_string(),
            None => self.discover_server(&tld).await?,
        };

        self.raw_query(&server, domain).await
    }
}
