//! Tests for channel insertion, removal and access.

use super::*;
use pretty_assertions::assert_eq;

fn filled(values: &[f64], samples: usize) -> SampleBuffer {
    let mut buffer = SampleBuffer::new(values.len(), samples, 44100.0).unwrap();
    for (ch, &v) in values.iter().enumerate() {
        buffer.channel_mut(ch).unwrap().fill(v);
    }
    buffer
}

#[test]
fn test_remove_then_add_reuses_storage() {
    let mut buffer = SampleBuffer::new(2, 16, 44100.0).unwrap();
    let ptr = buffer.channel(1).unwrap().as_ptr();

    buffer.remove_channel(1).unwrap();
    assert_eq!(buffer.channel_count(), 1);
    buffer.add_channel(false);

    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.physical_channel_count(), 2);
    assert_eq!(buffer.channel(1).unwrap().as_ptr(), ptr);
}

#[test]
fn test_remove_shifts_channels_down() {
    let mut buffer = filled(&[0.1, 0.2, 0.3], 2);
    buffer.remove_channel(0).unwrap();

    assert_eq!(buffer.to_channel_vecs(), vec![vec![0.2; 2], vec![0.3; 2]]);
    assert_eq!(buffer.physical_channel_count(), 3);
}

#[test]
fn test_insert_silent_at_front() {
    let mut buffer = filled(&[0.1, 0.2, 0.3], 2);
    buffer.remove_channel(0).unwrap();
    buffer.insert_channel(0, true).unwrap();

    assert_eq!(
        buffer.to_channel_vecs(),
        vec![vec![0.0; 2], vec![0.2; 2], vec![0.3; 2]]
    );
    assert_eq!(buffer.physical_channel_count(), 3);
}

#[test]
fn test_insert_non_silent_keeps_reused_content() {
    let mut buffer = filled(&[0.1, 0.2], 2);
    buffer.remove_channel(0).unwrap();
    buffer.add_channel(false);

    assert_eq!(buffer.channel(1).unwrap(), &[0.1, 0.1]);
}

#[test]
fn test_insert_in_middle() {
    let mut buffer = filled(&[0.1, 0.3], 1);
    buffer.insert_channel(1, true).unwrap();
    assert_eq!(buffer.to_channel_vecs(), vec![vec![0.1], vec![0.0], vec![0.3]]);
}

#[test]
fn test_insert_out_of_range() {
    let mut buffer = SampleBuffer::new(2, 4, 44100.0).unwrap();
    assert!(buffer.insert_channel(3, true).unwrap_err().is_invalid_argument());
    assert_eq!(buffer.channel_count(), 2);
}

#[test]
fn test_short_hidden_storage_is_grown() {
    let mut buffer = SampleBuffer::new(2, 4, 44100.0).unwrap();
    buffer.remove_channel(1).unwrap();
    buffer.set_sample_count(8, false);
    buffer.add_channel(true);

    assert_eq!(buffer.physical_channel_count(), 2);
    assert_eq!(buffer.channel(1).unwrap(), &[0.0; 8]);
}

#[test]
fn test_repeated_remove_add_stays_bounded() {
    let mut buffer = SampleBuffer::new(4, 32, 44100.0).unwrap();
    for _ in 0..10 {
        buffer.remove_channel(2).unwrap();
        buffer.remove_channel(0).unwrap();
        buffer.add_channel(true);
        buffer.insert_channel(0, true).unwrap();
    }
    assert_eq!(buffer.channel_count(), 4);
    assert_eq!(buffer.physical_channel_count(), 4);
}

#[test]
fn test_channel_index_checks() {
    let mut buffer = SampleBuffer::new(2, 4, 44100.0).unwrap();
    assert!(buffer.channel(2).unwrap_err().is_invalid_argument());
    assert!(buffer.channel_mut(2).is_err());
    assert!(buffer.borrow_channel(5).is_err());
    assert!(buffer.remove_channel(2).is_err());
}

#[test]
fn test_borrow_channel_exposes_backing_storage() {
    let mut buffer = SampleBuffer::new(1, 8, 44100.0).unwrap();
    buffer.init(1, 4, 44100.0).unwrap();

    let data = buffer.borrow_channel(0).unwrap();
    assert_eq!(data.len(), 8);
    data[0] = 0.5;

    assert_eq!(buffer.channel(0).unwrap().len(), 4);
    assert_eq!(buffer.channel(0).unwrap()[0], 0.5);
}

#[test]
fn test_set_raw_channel() {
    let mut buffer = SampleBuffer::new(1, 4, 44100.0).unwrap();
    let previous = buffer.set_raw_channel(0, vec![0.5; 6]).unwrap();

    assert_eq!(previous, vec![0.0; 4]);
    assert_eq!(buffer.channel(0).unwrap(), &[0.5; 4]);
    assert!(buffer
        .set_raw_channel(0, vec![0.0; 3])
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_channels_iterates_logical_views() {
    let mut buffer = filled(&[0.25, -0.25, 0.5], 3);
    buffer.init(2, 2, 44100.0).unwrap();

    let views: Vec<&[f64]> = buffer.channels().collect();
    assert_eq!(views, vec![&[0.25, 0.25][..], &[-0.25, -0.25][..]]);
}
