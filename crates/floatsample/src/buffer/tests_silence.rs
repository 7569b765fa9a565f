//! Tests for silencing whole buffers, channels and ranges.

use super::*;
use pretty_assertions::assert_eq;

fn ones(channels: usize, samples: usize) -> SampleBuffer {
    let mut buffer = SampleBuffer::new(channels, samples, 44100.0).unwrap();
    for ch in 0..channels {
        buffer.channel_mut(ch).unwrap().fill(1.0);
    }
    buffer
}

#[test]
fn test_silence_all() {
    let mut buffer = ones(2, 3);
    buffer.silence();
    assert_eq!(buffer.to_channel_vecs(), vec![vec![0.0; 3]; 2]);
}

#[test]
fn test_silence_only_touches_logical_range() {
    let mut buffer = ones(1, 4);
    buffer.init(1, 2, 44100.0).unwrap();
    buffer.silence();
    assert_eq!(buffer.borrow_channel(0).unwrap(), &[0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_silence_range() {
    let mut buffer = ones(2, 4);
    buffer.silence_range(1, 2).unwrap();
    assert_eq!(buffer.to_channel_vecs(), vec![vec![1.0, 0.0, 0.0, 1.0]; 2]);
}

#[test]
fn test_silence_range_rejects_without_change() {
    let mut buffer = ones(1, 4);
    assert!(buffer.silence_range(3, 2).unwrap_err().is_invalid_argument());
    assert_eq!(buffer.channel(0).unwrap(), &[1.0; 4]);
}

#[test]
fn test_silence_empty_range_at_end() {
    let mut buffer = ones(1, 4);
    buffer.silence_range(4, 0).unwrap();
    assert_eq!(buffer.channel(0).unwrap(), &[1.0; 4]);
}

#[test]
fn test_silence_channel() {
    let mut buffer = ones(2, 2);
    buffer.silence_channel(1).unwrap();
    assert_eq!(buffer.to_channel_vecs(), vec![vec![1.0; 2], vec![0.0; 2]]);
    assert!(buffer.silence_channel(2).unwrap_err().is_invalid_argument());
}

#[test]
fn test_silence_channel_range() {
    let mut buffer = ones(2, 4);
    buffer.silence_channel_range(0, 2, 2).unwrap();
    assert_eq!(
        buffer.to_channel_vecs(),
        vec![vec![1.0, 1.0, 0.0, 0.0], vec![1.0; 4]]
    );
    assert!(buffer.silence_channel_range(0, 0, 5).is_err());
    assert!(buffer.silence_channel_range(3, 0, 1).is_err());
}
