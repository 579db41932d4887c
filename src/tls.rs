use rcgen::{CertificateParams, DnType, SanType};
use std::net::IpAddr;
use std::path::Path;
use tracing::info;

/// Subject alternative names for the certificate: IP literals become IP
/// entries, everything else a DNS name.
pub fn subject_alt_names(names: &[String]) -> Vec<SanType> {
    names
        .iter()
        .map(|name| match name.parse::<IpAddr>() {
            Ok(ip) => SanType::IpAddress(ip),
            Err(_) => SanType::DnsName(name.clone()),
        })
        .collect()
}

/// Creates a self-signed certificate for `names` unless both files exist.
pub async fn ensure_tls_cert(cert_path: &Path, key_path: &Path, names: &[String]) -> Result<(), String> {
    if tokio::fs::metadata(cert_path).await.is_ok() && tokio::fs::metadata(key_path).await.is_ok() {
        return Ok(());
    }
    let common_name = names
        .first()
        .ok_or_else(|| "no certificate names configured".to_string())?;

    for parent in [cert_path.parent(), key_path.parent()].into_iter().flatten() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|err| format!("failed to create cert dir: {err}"))?;
    }

    let mut params = CertificateParams::default();
    params
        .distinguished_name
        .push(DnType::CommonName, common_name.as_str());
    params.subject_alt_names = subject_alt_names(names);
    let cert = rcgen::Certificate::from_params(params)
        .map_err(|err| format!("failed to create cert: {err}"))?;

    let cert_pem = cert.serialize_pem().map_err(|err| format!("failed to serialize cert: {err}"))?;
    tokio::fs::write(cert_path, cert_pem)
        .await
        .map_err(|err| format!("failed to write cert: {err}"))?;
    tokio::fs::write(key_path, cert.serialize_private_key_pem())
        .await
        .map_err(|err| format!("failed to write key: {err}"))?;
    info!(cert = %cert_path.display(), names = ?names, "generated self-signed certificate");
    Ok(())
}
