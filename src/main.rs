//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on a local port.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    host::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, ExitCode, Stdio};
    use std::{thread, time::Duration};

    const PORT: &str = "8000";

    fn wasm_pack() -> bool {
        log::info!("building WASM pkg");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(status) if status.success() => true,
            Ok(status) => {
                log::error!("wasm-pack exited with {}", status);
                false
            }
            Err(err) => {
                // Not fatal: an earlier bundle may still be in static/pkg.
                log::warn!("wasm-pack not runnable ({}); serving existing artifacts", err);
                true
            }
        }
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        if !wasm_pack() {
            return ExitCode::FAILURE;
        }

        log::info!("serving static/ at http://127.0.0.1:{}", PORT);
        let server = Command::new("python3")
            .args(["-m", "http.server", PORT, "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut server = match server {
            Ok(child) => child,
            Err(err) => {
                log::error!("failed to start http server: {}", err);
                return ExitCode::FAILURE;
            }
        };

        loop {
            match server.try_wait() {
                Ok(Some(status)) => {
                    log::warn!("http server exited with {}", status);
                    return ExitCode::FAILURE;
                }
                Ok(None) => thread::sleep(Duration::from_secs(1)),
                Err(err) => {
                    log::error!("lost track of http server: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        }
    }
}
