/*!
 * Descriptor Loader
 * Binary descriptor files to and from ready queues
 *
 * Layout (fixed little-endian, fixed-width):
 *
 * ```text
 * u32 count
 * repeat count times:
 *     u32 priority
 *     u32 arrival
 *     u32 burst_time
 * ```
 */

use super::descriptor::{DescriptorRecord, ProcessDescriptor};
use super::queue::ReadyQueue;
use crate::core::errors::{SchedResult, SchedulerError};
use crate::core::limits::{expected_file_size, HEADER_SIZE, RECORD_SIZE};
use bincode::Options;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Codec shared by reader and writer
#[inline]
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .allow_trailing_bytes()
}

fn decode_error(err: bincode::Error) -> SchedulerError {
    match *err {
        bincode::ErrorKind::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            SchedulerError::CorruptData(format!("unexpected end of descriptor data: {}", io))
        }
        bincode::ErrorKind::Io(io) => SchedulerError::Io(io.to_string()),
        other => SchedulerError::CorruptData(other.to_string()),
    }
}

fn encode_error(err: bincode::Error) -> SchedulerError {
    match *err {
        bincode::ErrorKind::Io(io) => SchedulerError::Io(io.to_string()),
        other => SchedulerError::InvalidArgument(other.to_string()),
    }
}

fn check_path(path: &Path) -> SchedResult<()> {
    if path.as_os_str().is_empty() {
        return Err(SchedulerError::InvalidArgument(
            "descriptor path is empty".into(),
        ));
    }
    Ok(())
}

/// Load a ready queue from a descriptor file
///
/// Every descriptor comes back with `started = false` and
/// `remaining_burst_time` equal to its burst. A file shorter than its
/// declared count is rejected as [`SchedulerError::CorruptData`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_descriptors(path: impl AsRef<Path>) -> SchedResult<ReadyQueue> {
    let path = path.as_ref();
    check_path(path)?;

    let file = File::open(path).map_err(|e| {
        SchedulerError::Io(format!("cannot open {}: {}", path.display(), e))
    })?;
    let metadata = file.metadata()?;

    let queue = if metadata.is_file() {
        read_descriptors(BufReader::new(file), metadata.len())?
    } else {
        // Pipes and FIFOs report no length, so drain them before decoding
        let mut bytes = Vec::new();
        BufReader::new(file).read_to_end(&mut bytes).map_err(|e| {
            SchedulerError::Io(format!("cannot read {}: {}", path.display(), e))
        })?;
        decode_descriptors(&bytes)?
    };
    info!(count = queue.len(), "Loaded process descriptors");
    Ok(queue)
}

/// Decode a ready queue from an in-memory descriptor buffer
pub fn decode_descriptors(bytes: &[u8]) -> SchedResult<ReadyQueue> {
    read_descriptors(bytes, bytes.len() as u64)
}

fn read_descriptors<R: Read>(mut reader: R, available: u64) -> SchedResult<ReadyQueue> {
    if available < HEADER_SIZE as u64 {
        return Err(SchedulerError::CorruptData(format!(
            "descriptor data is {} bytes, too short for the {}-byte header",
            available, HEADER_SIZE
        )));
    }

    let count: u32 = codec()
        .deserialize_from(&mut reader)
        .map_err(decode_error)?;

    let expected = expected_file_size(count);
    if available < expected {
        return Err(SchedulerError::CorruptData(format!(
            "header declares {} descriptors ({} bytes) but only {} bytes are present",
            count, expected, available
        )));
    }
    if available > expected {
        warn!(
            trailing = available - expected,
            "Ignoring trailing bytes after descriptor records"
        );
    }

    let mut queue = ReadyQueue::with_capacity(count as usize);
    for pid in 0..count {
        let record: DescriptorRecord = codec()
            .deserialize_from(&mut reader)
            .map_err(decode_error)?;
        queue.push_back(record.into_descriptor(pid));
    }

    debug!(count, record_size = RECORD_SIZE, "Decoded descriptor records");
    Ok(queue)
}

/// Write descriptors to a file in the loader's layout
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_descriptors<'a, I>(path: impl AsRef<Path>, descriptors: I) -> SchedResult<()>
where
    I: IntoIterator<Item = &'a ProcessDescriptor>,
{
    let path = path.as_ref();
    check_path(path)?;

    let file = File::create(path).map_err(|e| {
        SchedulerError::Io(format!("cannot create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let count = write_records(&mut writer, descriptors)?;
    writer.flush()?;

    info!(count, "Wrote process descriptors");
    Ok(())
}

/// Encode descriptors into an in-memory buffer in the loader's layout
pub fn encode_descriptors<'a, I>(descriptors: I) -> SchedResult<Vec<u8>>
where
    I: IntoIterator<Item = &'a ProcessDescriptor>,
{
    let mut buffer = Vec::new();
    write_records(&mut buffer, descriptors)?;
    Ok(buffer)
}

fn write_records<'a, W, I>(mut writer: W, descriptors: I) -> SchedResult<u32>
where
    W: Write,
    I: IntoIterator<Item = &'a ProcessDescriptor>,
{
    let records: Vec<DescriptorRecord> = descriptors.into_iter().map(Into::into).collect();
    let count = u32::try_from(records.len()).map_err(|_| {
        SchedulerError::InvalidArgument(format!(
            "{} descriptors exceed the u32 record count",
            records.len()
        ))
    })?;

    codec()
        .serialize_into(&mut writer, &count)
        .map_err(encode_error)?;
    for record in &records {
        codec()
            .serialize_into(&mut writer, record)
            .map_err(encode_error)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new(0, 3, 0, 2),
            ProcessDescriptor::new(1, 1, 4, 9),
        ]
    }

    #[test]
    fn test_encoding_is_little_endian_fixed_width() {
        let bytes = encode_descriptors(&sample()).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE + 2 * RECORD_SIZE);
        assert_eq!(&bytes[0..4], &[2, 0, 0, 0]);
        // priority, arrival, burst of the second record
        assert_eq!(&bytes[16..28], &[1, 0, 0, 0, 4, 0, 0, 0, 9, 0, 0, 0]);
    }

    #[test]
    fn test_decode_sets_fresh_run_state() {
        let bytes = encode_descriptors(&sample()).unwrap();
        let queue = decode_descriptors(&bytes).unwrap();
        assert_eq!(queue.len(), 2);
        let second = queue.get(1).unwrap();
        assert_eq!(second.pid, 1);
        assert_eq!(second.remaining_burst_time, 9);
        assert!(!second.started);
    }

    #[test]
    fn test_decode_truncated_record() {
        let mut bytes = encode_descriptors(&sample()).unwrap();
        bytes.truncate(bytes.len() - 1);
        let err = decode_descriptors(&bytes).unwrap_err();
        assert!(matches!(err, SchedulerError::CorruptData(_)));
    }

    #[test]
    fn test_decode_missing_header() {
        let err = decode_descriptors(&[1, 0]).unwrap_err();
        assert!(matches!(err, SchedulerError::CorruptData(_)));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut bytes = encode_descriptors(&sample()).unwrap();
        bytes.extend_from_slice(&[0xff; 5]);
        assert_eq!(decode_descriptors(&bytes).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = load_descriptors("").unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidArgument(_)));
        let err = write_descriptors("", &sample()).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidArgument(_)));
    }
}
