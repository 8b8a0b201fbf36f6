//! Test environment builder for isolated picbed testing.
//!
//! Provides `TestEnv` - a temp working directory and a temp home, plus
//! helpers to run the picbed CLI inside them.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread;

use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into tests
const PICBED_VARS: &[&str] = &[
    "PICBED_BACKEND",
    "PICBED_OSS_ENDPOINT",
    "PICBED_OSS_ACCESS_KEY_ID",
    "PICBED_OSS_ACCESS_KEY_SECRET",
    "PICBED_OSS_BUCKET",
    "PICBED_OSS_PREFIX",
    "PICBED_CACHE_DIR",
    "PICBED_OUTPUT_DIR",
    "PICBED_LOG",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Result of running a picbed CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated working directory and home for one test
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
        }
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the working directory, creating parents
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn create_dir(&self, relative: &str) {
        std::fs::create_dir_all(self.path(relative)).expect("Failed to create directory");
    }

    /// Names of the entries directly inside a directory, sorted
    pub fn list_dir(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path(relative))
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Run picbed from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run picbed with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_picbed"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));

        for var in PICBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute picbed");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// A localhost URL with nothing listening behind it
pub fn refused_url(path: &str) -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind")
        .local_addr()
        .expect("No local addr")
        .port();
    format!("http://127.0.0.1:{}/{}", port, path.trim_start_matches('/'))
}

/// Serve `body` with 200 OK to `hits` requests, then stop
pub fn serve_picture(body: &'static [u8], hits: usize) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    let handle = thread::spawn(move || {
        for _ in 0..hits {
            let (mut stream, _) = listener.accept().expect("accept failed");
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
    });
    (format!("http://{}", addr), handle)
}

/// Store config whose bucket requests are rejected locally, before any
/// connection is attempted (reqwest refuses non-HTTP schemes)
pub const OFFLINE_STORE_CONFIG: &str = r#"
[store]
backend = "aliyun-oss"

[store.aliyun_oss]
endpoint = "oss.example.invalid"
access_key_id = "id"
access_key_secret = "secret"
bucket_name = "bkt"
prefix = "pfx/"
scheme = "offline"
"#;

/// One request received by `serve_bucket`
#[derive(Debug, Clone)]
pub struct BucketRequest {
    pub method: String,
    pub path: String,
    /// Header lines, names lowercased
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl BucketRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A local stand-in for an OSS bucket.
///
/// Answers `hits` requests with 200 OK (`object` as the body of a `GET`)
/// and hands back what it received. Returns the TOML config pointing the
/// store at it: bucket `127` on endpoint `0.0.1:<port>` resolves to
/// `127.0.0.1:<port>`.
pub fn serve_bucket(
    object: &'static [u8],
    hits: usize,
) -> (String, thread::JoinHandle<Vec<BucketRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    let handle = thread::spawn(move || {
        let mut received = Vec::with_capacity(hits);
        for _ in 0..hits {
            let (mut stream, _) = listener.accept().expect("accept failed");
            let request = read_request(&mut stream);
            let body: &[u8] = if request.method == "GET" { object } else { b"" };
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
            received.push(request);
        }
        received
    });

    let config = format!(
        r#"
[store]
backend = "aliyun-oss"

[store.aliyun_oss]
endpoint = "0.0.1:{}"
access_key_id = "id"
access_key_secret = "secret"
bucket_name = "127"
prefix = "pfx/"
scheme = "http"
"#,
        port
    );
    (config, handle)
}

fn read_request(stream: &mut impl Read) -> BucketRequest {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let head_end = loop {
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut buf).expect("read failed");
        assert!(n > 0, "connection closed before request head");
        data.extend_from_slice(&buf[..n]);
    };

    let head = String::from_utf8_lossy(&data[..head_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split(' ');
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let length: usize = headers
        .iter()
        .find(|(n, _)| n == "content-length")
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);
    let mut body = data[head_end + 4..].to_vec();
    while body.len() < length {
        let n = stream.read(&mut buf).expect("read failed");
        assert!(n > 0, "connection closed before request body");
        body.extend_from_slice(&buf[..n]);
    }

    BucketRequest {
        method,
        path,
        headers,
        body,
    }
}
