// Primitives for writing CSV files.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::generate::*;

pub const HEADER: [&str; 4] = ["kuname", "candidate_name", "party", "color"];

/// Writes the records to `path`, replacing any existing file.
///
/// The rows go to a temporary file next to the destination first, which is then renamed.
/// A failure leaves the destination as it was. The permissions of an existing destination
/// are kept; a new file gets the same mode as a plain `File::create`.
pub fn write_records(path: &str, records: &[CandidateRecord]) -> GenResult<()> {
    let dest = Path::new(path);
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = create_temp_output(dir, dest).context(CreatingOutputSnafu { path })?;
    debug!("write_records: temporary file {:?}", tmp.path());

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(tmp);
    wtr.write_record(HEADER).context(WritingCsvSnafu { path })?;
    for r in records.iter() {
        wtr.write_record([
            r.district.as_str(),
            r.candidate_name.as_str(),
            r.party_name.as_str(),
            r.color.as_str(),
        ])
        .context(WritingCsvSnafu { path })?;
    }
    let tmp = wtr
        .into_inner()
        .map_err(|e| e.into_error())
        .context(FlushingOutputSnafu { path })?;
    // The error owns the temporary file, which is deleted when it is dropped here.
    tmp.persist(dest)
        .map_err(|e| e.error)
        .context(PersistingOutputSnafu { path })?;
    info!("Wrote {} rows to {:?}", records.len(), path);
    Ok(())
}

fn create_temp_output(dir: &Path, dest: &Path) -> io::Result<NamedTempFile> {
    let tmp = new_temp_in(dir)?;
    match fs::metadata(dest) {
        Ok(meta) if meta.is_file() => tmp.as_file().set_permissions(meta.permissions())?,
        _ => {}
    }
    Ok(tmp)
}

#[cfg(unix)]
fn new_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // 0o666 before the umask, as for File::create.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(district: &str, name: &str, party: &str, color: &str) -> CandidateRecord {
        CandidateRecord {
            district: district.to_string(),
            candidate_name: name.to_string(),
            party_name: party.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn header_only() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        write_records(p.to_str().unwrap(), &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&p).unwrap(),
            "kuname,candidate_name,party,color\n"
        );
    }

    #[test]
    fn rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        let records = vec![
            record("千代田区", "候補者A", "公明党", "#f55883"),
            record("千代田区", "候補者B", "無所属", "#999999"),
        ];
        write_records(p.to_str().unwrap(), &records).unwrap();
        assert_eq!(
            fs::read_to_string(&p).unwrap(),
            "kuname,candidate_name,party,color\n\
             千代田区,候補者A,公明党,#f55883\n\
             千代田区,候補者B,無所属,#999999\n"
        );
    }

    #[test]
    fn quotes_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        write_records(
            p.to_str().unwrap(),
            &[record("a,b", "候補者A", "無所属", "#999999")],
        )
        .unwrap();
        let contents = fs::read_to_string(&p).unwrap();
        assert!(contents.ends_with("\"a,b\",候補者A,無所属,#999999\n"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        fs::write(&p, "old content that is much longer than the new one\n").unwrap();
        write_records(p.to_str().unwrap(), &[]).unwrap();
        assert_eq!(
            fs::read_to_string(&p).unwrap(),
            "kuname,candidate_name,party,color\n"
        );
    }

    #[test]
    fn missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("missing").join("out.csv");
        let res = write_records(p.to_str().unwrap(), &[]);
        assert!(matches!(res, Err(GenError::CreatingOutput { .. })));
        assert!(!p.exists());
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        // A directory in place of the destination makes the final rename fail.
        fs::create_dir(&p).unwrap();
        let res = write_records(
            p.to_str().unwrap(),
            &[record("a", "候補者A", "無所属", "#999999")],
        );
        assert!(matches!(res, Err(GenError::PersistingOutput { .. })));
        let entries: Vec<std::ffi::OsString> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("out.csv")]);
        assert!(p.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.csv");
        fs::write(&p, "old\n").unwrap();
        fs::set_permissions(&p, fs::Permissions::from_mode(0o640)).unwrap();
        write_records(p.to_str().unwrap(), &[]).unwrap();
        let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);

        fs::set_permissions(&p, fs::Permissions::from_mode(0o644)).unwrap();
        write_records(p.to_str().unwrap(), &[]).unwrap();
        let mode = fs::metadata(&p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_default_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.txt");
        fs::File::create(&reference).unwrap();
        let p = dir.path().join("out.csv");
        write_records(p.to_str().unwrap(), &[]).unwrap();
        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&p), mode(&reference));
    }
}
