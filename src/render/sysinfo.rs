//! Host system info renderer.
//!
//! Five fixed lines sourced from `uname(2)`. A failed uname call yields a
//! per-request 500, never a process crash.

use nix::sys::utsname::uname;

use crate::render::RenderedResponse;

pub fn render_sysinfo() -> RenderedResponse {
    match uname() {
        Ok(info) => {
            let body = format!(
                "System Name: {}\nNode Name: {}\nRelease: {}\nVersion: {}\nMachine: {}\n",
                info.sysname().to_string_lossy(),
                info.nodename().to_string_lossy(),
                info.release().to_string_lossy(),
                info.version().to_string_lossy(),
                info.machine().to_string_lossy(),
            );
            RenderedResponse::ok("text/plain", body)
        }
        Err(e) => {
            tracing::error!(error = %e, "uname failed");
            RenderedResponse::error(500, "Could not retrieve system information")
        }
    }
}
