use crate::{MutableState, Runtime};

#[test]
fn readers_observe_writes_and_versions() {
    let mut writer = MutableState::new(0.0f32);
    let reader = writer.as_state();
    let second_reader = reader.clone();
    assert_eq!(reader.version(), 0);

    writer.set_value(42.0);
    assert_eq!(reader.get(), 42.0);
    assert_eq!(second_reader.get(), 42.0);
    assert_eq!(reader.version(), 1);

    writer.set_value(84.0);
    assert_eq!(reader.with(|value| *value), 84.0);
    assert_eq!(reader.version(), 2);
}

#[test]
fn writes_request_a_frame() {
    let runtime = Runtime::default();
    let mut writer = MutableState::with_runtime(false, runtime.handle());
    assert!(!runtime.needs_frame());

    writer.set_value(true);
    assert!(runtime.needs_frame());
    assert!(writer.get());
}
