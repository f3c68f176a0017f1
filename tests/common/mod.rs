use std::sync::{Arc, Mutex};

use rcgen::{
    BasicConstraints, Certificate, CertificateParams, DistinguishedName, DnType, IsCa, KeyPair,
    SanType,
};
use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use rustls::server::WebPkiClientVerifier;
use rustls::{RootCertStore, ServerConfig};
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

use dockls::config::DockerConfig;

pub struct Authority {
    cert: Certificate,
    key: KeyPair,
}

impl Authority {
    pub fn new(common_name: &str) -> Self {
        let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
        params.distinguished_name = DistinguishedName::new();
        params
            .distinguished_name
            .push(DnType::CommonName, common_name);
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);

        let key = KeyPair::generate().unwrap();
        let cert = params.self_signed(&key).unwrap();
        Self { cert, key }
    }

    pub fn issue(&self, common_name: &str) -> (Certificate, KeyPair) {
        let mut params = CertificateParams::new(vec!["localhost".to_string()]).unwrap();
        params.distinguished_name = DistinguishedName::new();
        params
            .distinguished_name
            .push(DnType::CommonName, common_name);
        params
            .subject_alt_names
            .push(SanType::IpAddress("127.0.0.1".parse().unwrap()));

        let key = KeyPair::generate().unwrap();
        let cert = params.signed_by(&key, &self.cert, &self.key).unwrap();
        (cert, key)
    }
}

/// Writes `ca.pem`, `cert.pem` and `key.pem` the way the docker CLI lays
/// them out. The client certificate is issued by `client_issuer`.
pub fn client_config(
    dir: &TempDir,
    endpoint: &str,
    trusted: &Authority,
    client_issuer: &Authority,
) -> DockerConfig {
    let (client_cert, client_key) = client_issuer.issue("dockls-client");

    let ca_cert_path = dir.path().join("ca.pem");
    let client_cert_path = dir.path().join("cert.pem");
    let client_key_path = dir.path().join("key.pem");
    std::fs::write(&ca_cert_path, trusted.cert.pem()).unwrap();
    std::fs::write(&client_cert_path, client_cert.pem()).unwrap();
    std::fs::write(&client_key_path, client_key.serialize_pem()).unwrap();

    DockerConfig {
        endpoint: endpoint.to_string(),
        ca_cert_path,
        client_cert_path,
        client_key_path,
        timeout_secs: 10,
    }
}

/// A single-purpose engine answering every request with the same response.
/// It only accepts clients whose certificate chains to `authority`, and
/// speaks TLS 1.2 so a rejected certificate fails inside the handshake.
pub struct TestEngine {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestEngine {
    pub async fn start(authority: &Authority, status_line: &str, body: &str) -> Self {
        let mut roots = RootCertStore::empty();
        roots.add(authority.cert.der().clone()).unwrap();
        let verifier = WebPkiClientVerifier::builder(Arc::new(roots))
            .build()
            .unwrap();

        let (server_cert, server_key) = authority.issue("docker-engine");
        let server_key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(server_key.serialize_der()));
        let config = ServerConfig::builder_with_protocol_versions(&[&rustls::version::TLS12])
            .with_client_cert_verifier(verifier)
            .with_single_cert(vec![server_cert.der().clone()], server_key)
            .unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let acceptor = TlsAcceptor::from(Arc::new(config));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        tokio::spawn(async move {
            while let Ok((tcp, _)) = listener.accept().await {
                let Ok(tls) = acceptor.accept(tcp).await else {
                    continue;
                };
                let mut reader = BufReader::new(tls);
                let mut request_line = String::new();
                if reader.read_line(&mut request_line).await.is_err() {
                    continue;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header).await {
                        Ok(0) | Err(_) => break,
                        Ok(_) if header == "\r\n" => break,
                        Ok(_) => {}
                    }
                }
                seen.lock().unwrap().push(request_line.trim_end().to_string());

                let mut tls = reader.into_inner();
                let _ = tls.write_all(response.as_bytes()).await;
                let _ = tls.shutdown().await;
            }
        });

        Self {
            endpoint: format!("tcp://127.0.0.1:{}", port),
            requests,
        }
    }

    /// Request lines received so far, e.g. `GET /v1.45/containers/json?all=true HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
