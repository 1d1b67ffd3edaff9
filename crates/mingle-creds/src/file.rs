use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use mingle_types::Credential;

use crate::error::{CredentialError, CredentialResult};
use crate::traits::CredentialStore;

/// Flat-file credential store.
///
/// On-disk format, one record per line:
/// ```text
/// <name> <password>\n
/// ```
/// Fields are separated by whitespace; the format has no header and no
/// escaping, so names and passwords containing whitespace are unsupported.
///
/// The file is consumed in full at load time and only ever appended to
/// afterwards. A line that does not split into exactly two tokens aborts
/// the load with [`CredentialError::MalformedLine`]; there is no framing
/// to distinguish a torn write from corruption, so the store never skips
/// a record.
pub struct FileCredentialStore {
    /// Path to the credential file.
    path: PathBuf,
}

impl FileCredentialStore {
    /// Open a credential store at the given path.
    ///
    /// If the file does not exist it is created empty. An existing file is
    /// never truncated.
    pub fn open(path: impl AsRef<Path>) -> CredentialResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            File::create(&path)?;
            debug!(path = %path.display(), "created empty credential file");
        }
        Ok(Self { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_line(line_no: usize, line: &str) -> CredentialResult<Credential> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name), Some(password), None) => Ok(Credential::new(name, password)),
            _ => Err(CredentialError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            }),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> CredentialResult<Vec<Credential>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut credentials = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            credentials.push(Self::parse_line(index + 1, &line)?);
        }

        debug!(
            path = %self.path.display(),
            count = credentials.len(),
            "loaded credential file"
        );
        Ok(credentials)
    }

    fn append(&self, credential: &Credential) -> CredentialResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} {}", credential.name, credential.password)?;

        debug!(
            path = %self.path.display(),
            name = %credential.name,
            "appended credential"
        );
        Ok(())
    }
}

impl std::fmt::Debug for FileCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredentialStore")
            .field("path", &self.path)
            .finish()
    }
}
