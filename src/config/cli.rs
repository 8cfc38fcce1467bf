use crate::core::Storage;
use crate::utils::error::Result;
use clap::Parser;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(about = "Flatten a bug bounty inventory into one JSON row per domain")]
pub struct CliArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // rw-r--r--
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(full_path)?;
        file.write_all(data)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_truncates_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(async {
            storage
                .write_file("out.json", b"[\n    \"a much longer previous run\"\n]")
                .await
                .unwrap();
            storage.write_file("out.json", b"[]").await.unwrap();

            assert_eq!(storage.read_file("out.json").await.unwrap(), b"[]");
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_owner_writable_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        tokio_test::block_on(storage.write_file("out.json", b"[]")).unwrap();

        let mode = fs::metadata(temp_dir.path().join("out.json"))
            .unwrap()
            .permissions()
            .mode();
        // umask may only clear bits
        assert_eq!(mode & 0o700, 0o600);
        assert_eq!(mode & 0o133, 0);
    }

    #[test]
    fn test_cli_accepts_no_arguments() {
        let args = CliArgs::try_parse_from(["chaos-targets"]).unwrap();
        assert!(!args.verbose);
        assert!(CliArgs::try_parse_from(["chaos-targets", "--verbose"]).unwrap().verbose);
    }
}
