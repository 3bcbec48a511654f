//! StateObserver - reacting to a state by its status.
//!
//! Every callback defaults to a no-op, so an observer only implements the
//! cases it cares about. [`StateEnvelope::dispatch`] picks the callback.
//!
//! [`StateEnvelope::dispatch`]: crate::domain::StateEnvelope::dispatch

use crate::domain::ErrorDetail;

/// Callbacks for each [`Status`](crate::domain::Status).
///
/// The payload is passed to every callback because an envelope always has
/// one, even while loading.
pub trait StateObserver<T> {
    fn on_loading(&mut self, _data: &T) {}

    fn on_success(&mut self, _data: &T) {}

    /// `error` is `None` when the state was built without a detail.
    fn on_error(&mut self, _error: Option<&ErrorDetail>, _data: &T) {}

    fn on_no_results(&mut self, _data: &T) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StateEnvelope, Status};
    use rstest::rstest;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl StateObserver<Vec<u32>> for Recorder {
        fn on_loading(&mut self, data: &Vec<u32>) {
            self.calls.push(format!("loading:{}", data.len()));
        }

        fn on_success(&mut self, data: &Vec<u32>) {
            self.calls.push(format!("success:{}", data.len()));
        }

        fn on_error(&mut self, error: Option<&ErrorDetail>, _data: &Vec<u32>) {
            let msg = error.map(ToString::to_string).unwrap_or_else(|| "-".to_string());
            self.calls.push(format!("error:{msg}"));
        }

        fn on_no_results(&mut self, _data: &Vec<u32>) {
            self.calls.push("no_results".to_string());
        }
    }

    /// Only reacts to success, like an observer with a single override.
    #[derive(Default)]
    struct SuccessOnly {
        seen: Option<u32>,
    }

    impl StateObserver<u32> for SuccessOnly {
        fn on_success(&mut self, data: &u32) {
            self.seen = Some(*data);
        }
    }

    #[rstest]
    #[case::loading(StateEnvelope::loading(vec![]), "loading:0")]
    #[case::success(StateEnvelope::success(vec![1, 2]), "success:2")]
    #[case::error(StateEnvelope::error(vec![], ErrorDetail::msg("offline")), "error:offline")]
    #[case::error_without_detail(StateEnvelope::from_parts(vec![], Status::Error, None), "error:-")]
    #[case::no_results(StateEnvelope::no_results(vec![]), "no_results")]
    fn dispatch_calls_exactly_one_callback(
        #[case] state: StateEnvelope<Vec<u32>>,
        #[case] expected: &str,
    ) {
        let mut rec = Recorder::default();
        state.dispatch(&mut rec);
        assert_eq!(rec.calls, vec![expected.to_string()]);
    }

    #[test]
    fn dispatch_follows_status_even_when_inconsistent() {
        let mut rec = Recorder::default();
        StateEnvelope::success(vec![9])
            .with_error(ErrorDetail::msg("ignored"))
            .dispatch(&mut rec);
        assert_eq!(rec.calls, vec!["success:1".to_string()]);
    }

    #[test]
    fn unimplemented_callbacks_are_no_ops() {
        let mut obs = SuccessOnly::default();
        StateEnvelope::loading(1).dispatch(&mut obs);
        StateEnvelope::error(2, ErrorDetail::msg("x")).dispatch(&mut obs);
        StateEnvelope::no_results(3).dispatch(&mut obs);
        assert_eq!(obs.seen, None);

        StateEnvelope::success(4).dispatch(&mut obs);
        assert_eq!(obs.seen, Some(4));
    }

    #[test]
    fn dispatch_through_trait_object() {
        let mut rec = Recorder::default();
        {
            let obs: &mut dyn StateObserver<Vec<u32>> = &mut rec;
            StateEnvelope::loading(vec![1]).dispatch(obs);
        }
        assert_eq!(rec.calls, vec!["loading:1".to_string()]);
    }
}
