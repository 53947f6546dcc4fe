//! Client side of the `kata-server` line protocol, used by the benchmarks.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Default location of the server binary relative to this crate.
pub const DEFAULT_SERVER_BIN: &str = "../target/release/kata-server";

/// A spawned `kata-server` speaking the line protocol over pipes.
pub struct Runner {
    child: Child,
    stdin: BufWriter<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl Runner {
    pub fn spawn(bin: &str) -> std::io::Result<Self> {
        let mut child = Command::new(bin)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        let stdin = child.stdin.take().map(BufWriter::new);
        let stdout = child.stdout.take().map(BufReader::new);
        match (stdin, stdout) {
            (Some(stdin), Some(stdout)) => Ok(Self {
                child,
                stdin,
                stdout,
            }),
            _ => Err(std::io::Error::other("server pipes unavailable")),
        }
    }

    /// Send one command and return the payload of its `OK` reply.
    pub fn ask(&mut self, line: &str) -> std::io::Result<String> {
        writeln!(self.stdin, "{line}")?;
        self.stdin.flush()?;
        let mut reply = String::new();
        self.stdout.read_line(&mut reply)?;
        let reply = reply.trim_end_matches(['\n', '\r']);
        match reply.strip_prefix("OK ") {
            Some(payload) => Ok(payload.to_owned()),
            None => Err(std::io::Error::other(format!("server replied {reply:?}"))),
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        let _ = writeln!(self.stdin, "QUIT");
        let _ = self.stdin.flush();
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
