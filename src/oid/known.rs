//! Object identifiers that show up constantly in X.509 material.

/// PKCS #1 `rsaEncryption`
pub const RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
/// PKCS #1 `sha256WithRSAEncryption`
pub const SHA256_WITH_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.11";
/// RFC 5480 `id-ecPublicKey`
pub const EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
/// RFC 5480 `secp256r1` / `prime256v1`
pub const PRIME256V1: &str = "1.2.840.10045.3.1.7";
/// RFC 5758 `ecdsa-with-SHA256`
pub const ECDSA_WITH_SHA256: &str = "1.2.840.10045.4.3.2";
/// RFC 8410 `id-Ed25519`
pub const ED25519: &str = "1.3.101.112";
/// NIST `id-sha256`
pub const SHA256: &str = "2.16.840.1.101.3.4.2.1";
/// X.520 `commonName`
pub const COMMON_NAME: &str = "2.5.4.3";
/// PKCS #9 `emailAddress`
pub const EMAIL_ADDRESS: &str = "1.2.840.113549.1.9.1";

const NAMES: &[(&str, &str)] = &[
    (RSA_ENCRYPTION, "rsaEncryption"),
    (SHA256_WITH_RSA_ENCRYPTION, "sha256WithRSAEncryption"),
    (EC_PUBLIC_KEY, "ecPublicKey"),
    (PRIME256V1, "prime256v1"),
    (ECDSA_WITH_SHA256, "ecdsa-with-SHA256"),
    (ED25519, "Ed25519"),
    (SHA256, "sha256"),
    (COMMON_NAME, "commonName"),
    (EMAIL_ADDRESS, "emailAddress"),
];

/// Look up the conventional name of a dotted OID
pub fn name_of(oid: &str) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(dotted, _)| *dotted == oid)
        .map(|(_, name)| *name)
}
