//! Running the subject process.
//!
//! The subject is invoked once per fixture as `<program> [args..] <mode>`
//! with the fixture source on stdin. Stdout and stderr are drained on
//! helper threads so a chatty child cannot fill a pipe and stall, and the
//! child is polled until it exits or the timeout elapses.
//!
//! The pipes can outlive the child: a wrapper script that backgrounds or
//! forks without `exec` leaves a descendant holding them. Drained chunks
//! therefore arrive over channels and are only collected until the run's
//! deadline. A drain thread still blocked on such a pipe is left behind
//! and ends when the descendant closes it.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::Mode;

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// How long output may keep arriving after the child was killed.
const KILL_GRACE: Duration = Duration::from_millis(250);

/// The subject could not produce output for a fixture.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("cannot start subject {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("subject i/o: {0}")]
    Io(#[from] io::Error),
    #[error("subject did not finish within {after:?}")]
    Timeout {
        after: Duration,
        stdout: String,
        stderr: String,
    },
    #[error("subject exited with {}: {}", exit_code(*code), stderr.trim_end())]
    Exit {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl ProcessError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProcessError::Timeout { .. })
    }
}

fn exit_code(code: Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |code| format!("status {code}"))
}

/// Captured output of a successful subject run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectOutput {
    pub stdout: String,
    pub stderr: String,
}

/// How to invoke the subject.
#[derive(Clone, Debug)]
pub struct SubjectRunner {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl SubjectRunner {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        SubjectRunner {
            program: program.into(),
            args: Vec::new(),
            timeout,
        }
    }

    /// Arguments placed before the mode.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the subject in `mode` with `source` on stdin.
    pub fn run(&self, mode: Mode, source: &str) -> Result<SubjectOutput, ProcessError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(mode.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        let mut child = Reaper(child);

        // Never joined: a descendant that inherits stdin without reading
        // it could block the write indefinitely.
        let stdin = child.0.stdin.take();
        let input = source.as_bytes().to_vec();
        thread::spawn(move || {
            if let Some(mut stdin) = stdin {
                // A child that exits without reading closes the pipe early.
                let _ = stdin.write_all(&input);
            }
        });
        let stdout = drain(child.0.stdout.take());
        let stderr = drain(child.0.stderr.take());

        let started = Instant::now();
        let deadline = started + self.timeout;
        let status = loop {
            if let Some(status) = child.0.try_wait()? {
                break status;
            }
            if Instant::now() > deadline {
                warn!(program = %self.program.display(), timeout = ?self.timeout, "killing subject");
                child.kill();
                let grace = Instant::now() + KILL_GRACE;
                return Err(ProcessError::Timeout {
                    after: self.timeout,
                    stdout: collect(&stdout, grace).text,
                    stderr: collect(&stderr, grace).text,
                });
            }
            thread::sleep(POLL_INTERVAL);
        };

        let deadline = deadline.max(Instant::now() + KILL_GRACE);
        let stdout = collect(&stdout, deadline);
        let stderr = collect(&stderr, deadline);
        if !(stdout.complete && stderr.complete) {
            warn!(
                program = %self.program.display(),
                timeout = ?self.timeout,
                "subject exited but its output stayed open"
            );
            return Err(ProcessError::Timeout {
                after: self.timeout,
                stdout: stdout.text,
                stderr: stderr.text,
            });
        }
        debug!(%mode, code = ?status.code(), elapsed = ?started.elapsed(), "subject finished");
        check_status(status, stdout.text, stderr.text)
    }
}

fn check_status(
    status: ExitStatus,
    stdout: String,
    stderr: String,
) -> Result<SubjectOutput, ProcessError> {
    if status.success() {
        Ok(SubjectOutput { stdout, stderr })
    } else {
        Err(ProcessError::Exit {
            code: status.code(),
            stdout,
            stderr,
        })
    }
}

/// Forward everything read from `pipe` as chunks until end of file.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let Some(mut pipe) = pipe else {
            return;
        };
        let mut buf = [0u8; 8192];
        loop {
            match pipe.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(_) => break,
            }
        }
    });
    rx
}

/// Output gathered from one drained pipe.
struct Collected {
    text: String,
    /// The pipe reached end of file before the deadline.
    complete: bool,
}

fn collect(chunks: &Receiver<Vec<u8>>, deadline: Instant) -> Collected {
    let mut bytes = Vec::new();
    let complete = loop {
        let left = deadline.saturating_duration_since(Instant::now());
        match chunks.recv_timeout(left) {
            Ok(chunk) => bytes.extend_from_slice(&chunk),
            Err(RecvTimeoutError::Disconnected) => break true,
            Err(RecvTimeoutError::Timeout) => break false,
        }
    };
    Collected {
        text: String::from_utf8_lossy(&bytes).into_owned(),
        complete,
    }
}

/// Kills and reaps the child on every exit path.
struct Reaper(Child);

impl Reaper {
    fn kill(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        if !matches!(self.0.try_wait(), Ok(Some(_))) {
            self.kill();
        }
    }
}
