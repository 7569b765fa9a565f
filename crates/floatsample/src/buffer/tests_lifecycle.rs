//! Tests for buffer construction, init and reset.

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_new_is_silent() {
    let buffer = SampleBuffer::new(2, 4, 44100.0).unwrap();
    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.sample_count(), 4);
    assert_eq!(buffer.sample_rate(), 44100.0);
    assert_eq!(buffer.to_channel_vecs(), vec![vec![0.0; 4]; 2]);
}

#[test]
fn test_new_rejects_bad_sample_rate() {
    assert!(SampleBuffer::new(1, 1, 0.0).unwrap_err().is_invalid_argument());
    assert!(SampleBuffer::new(1, 1, -44100.0).is_err());
    assert!(SampleBuffer::new(1, 1, f64::NAN).is_err());
    assert!(SampleBuffer::new(1, 1, f64::INFINITY).is_err());
}

#[test]
fn test_default_is_empty() {
    let buffer = SampleBuffer::default();
    assert_eq!(buffer.channel_count(), 0);
    assert_eq!(buffer.sample_count(), 0);
    assert_eq!(buffer.physical_channel_count(), 0);
}

#[test]
fn test_init_shrink_keeps_storage() {
    let mut buffer = SampleBuffer::new(2, 8, 44100.0).unwrap();
    buffer.init(1, 4, 44100.0).unwrap();

    assert_eq!(buffer.channel_count(), 1);
    assert_eq!(buffer.sample_count(), 4);
    assert_eq!(buffer.physical_channel_count(), 2);
    assert_eq!(buffer.borrow_channel(0).unwrap().len(), 8);
}

#[test]
fn test_init_regrow_reuses_hidden_channels() {
    let mut buffer = SampleBuffer::new(2, 8, 44100.0).unwrap();
    let ptr = buffer.channel(1).unwrap().as_ptr();
    buffer.init(1, 4, 44100.0).unwrap();
    buffer.init(2, 8, 44100.0).unwrap();

    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.physical_channel_count(), 2);
    assert_eq!(buffer.channel(1).unwrap().as_ptr(), ptr);
}

#[test]
fn test_init_same_sizes_keeps_content() {
    let mut buffer = SampleBuffer::new(1, 3, 44100.0).unwrap();
    buffer.channel_mut(0).unwrap().copy_from_slice(&[0.1, 0.2, 0.3]);
    buffer.init(1, 3, 48000.0).unwrap();

    assert_eq!(buffer.channel(0).unwrap(), &[0.1, 0.2, 0.3]);
    assert_eq!(buffer.sample_rate(), 48000.0);
}

#[test]
fn test_init_rejects_bad_rate_without_change() {
    let mut buffer = SampleBuffer::new(2, 4, 44100.0).unwrap();
    assert!(buffer.init(1, 2, 0.0).is_err());
    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.sample_count(), 4);
    assert_eq!(buffer.sample_rate(), 44100.0);
}

#[test]
fn test_reset_frees_hidden_storage() {
    let mut buffer = SampleBuffer::new(3, 4, 44100.0).unwrap();
    buffer.remove_channel(0).unwrap();
    assert_eq!(buffer.physical_channel_count(), 3);

    buffer.reset();
    assert_eq!(buffer.channel_count(), 0);
    assert_eq!(buffer.sample_count(), 0);
    assert_eq!(buffer.sample_rate(), 1.0);
    assert_eq!(buffer.physical_channel_count(), 0);
}

#[test]
fn test_reset_to_reuses_exact_fits_only() {
    let mut buffer = SampleBuffer::new(3, 4, 44100.0).unwrap();
    buffer.reset_to(2, 4, 48000.0).unwrap();
    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.physical_channel_count(), 2);

    buffer.reset_to(2, 3, 48000.0).unwrap();
    assert_eq!(buffer.physical_channel_count(), 2);
    assert_eq!(buffer.borrow_channel(0).unwrap().len(), 3);
    assert_eq!(buffer.borrow_channel(1).unwrap().len(), 3);
}

#[test]
fn test_set_sample_count_keeps_old_samples() {
    let mut buffer = SampleBuffer::new(1, 4, 44100.0).unwrap();
    buffer.channel_mut(0).unwrap().copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);

    buffer.set_sample_count(2, true);
    assert_eq!(buffer.channel(0).unwrap(), &[1.0, 2.0]);

    buffer.set_sample_count(4, true);
    assert_eq!(buffer.channel(0).unwrap(), &[1.0, 2.0, 0.0, 0.0]);
}

#[test]
fn test_set_sample_count_extends_storage() {
    let mut buffer = SampleBuffer::new(2, 2, 44100.0).unwrap();
    buffer.channel_mut(0).unwrap().copy_from_slice(&[0.5, -0.5]);

    buffer.set_sample_count(5, true);
    assert_eq!(buffer.sample_count(), 5);
    assert_eq!(buffer.channel(0).unwrap(), &[0.5, -0.5, 0.0, 0.0, 0.0]);
    assert_eq!(buffer.channel(1).unwrap(), &[0.0; 5]);
}

#[test]
fn test_set_sample_count_without_keep() {
    let mut buffer = SampleBuffer::new(1, 2, 44100.0).unwrap();
    buffer.set_sample_count(6, false);
    assert_eq!(buffer.sample_count(), 6);
    assert_eq!(buffer.channel(0).unwrap().len(), 6);
}

#[test]
fn test_set_sample_rate() {
    let mut buffer = SampleBuffer::new(1, 1, 44100.0).unwrap();
    buffer.set_sample_rate(96000.0).unwrap();
    assert_eq!(buffer.sample_rate(), 96000.0);
    assert!(buffer.set_sample_rate(0.0).unwrap_err().is_invalid_argument());
    assert_eq!(buffer.sample_rate(), 96000.0);
}
