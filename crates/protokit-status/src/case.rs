//! Proto identifier -> Swift identifier conversion

use crate::config::AcronymTable;

/// Convert `PROTO_SNAKE_CASE` to `swiftCamelCase`.
///
/// `OK` is special-cased to `ok`. Segments after the first are looked up in
/// `acronyms` and otherwise title-cased, so with the default table
/// `INVALID_FILE_ID` becomes `invalidFileID` and `INSUFFICIENT_TX_FEE`
/// becomes `insufficientTxFee`.
pub fn to_swift_case(proto_name: &str, acronyms: &AcronymTable) -> String {
    if proto_name == "OK" {
        return "ok".to_string();
    }

    let mut parts = proto_name.split('_');
    let mut result = parts.next().unwrap_or_default().to_lowercase();

    for part in parts {
        match acronyms.get(part) {
            Some(mapped) => result.push_str(mapped),
            None => result.push_str(&capitalize(part)),
        }
    }

    result
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SyncConfig;
    use rstest::rstest;

    #[rstest]
    #[case("OK", "ok")]
    #[case("INVALID_TRANSACTION", "invalidTransaction")]
    #[case("INVALID_FILE_ID", "invalidFileID")]
    #[case("INSUFFICIENT_TX_FEE", "insufficientTxFee")]
    #[case("INVALID_IPV4_ADDRESS", "invalidIpv4Address")]
    #[case("ACCOUNT_KYC_NOT_GRANTED_FOR_TOKEN", "accountKycNotGrantedForToken")]
    #[case("GRPC_WEB_PROXY_NOT_SUPPORTED", "grpcWebProxyNotSupported")]
    #[case("BUSY", "busy")]
    fn converts_with_default_acronyms(#[case] input: &str, #[case] expected: &str) {
        let config = SyncConfig::default();
        assert_eq!(to_swift_case(input, &config.acronyms), expected);
    }

    #[test]
    fn empty_segments_are_tolerated() {
        let acronyms = AcronymTable::new();
        assert_eq!(to_swift_case("A__B", &acronyms), "aB");
        assert_eq!(to_swift_case("TRAILING_", &acronyms), "trailing");
    }

    #[test]
    fn custom_acronym_table_is_honored() {
        let mut acronyms = AcronymTable::new();
        acronyms.insert("TX".into(), "TX".into());
        assert_eq!(to_swift_case("INSUFFICIENT_TX_FEE", &acronyms), "insufficientTXFee");
    }
}
