//! Enter/exit hooks as effect factories.

use crate::core::State;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Error returned by a failing hook.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HookError {
    #[error("Hook failed: {0}")]
    Failed(String),
}

impl HookError {
    /// Shorthand for [`HookError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Type alias for hook factories.
///
/// A hook receives the state identifier it is attached to and produces a
/// fresh effect on each invocation. The effect may complete immediately
/// or suspend; the machine awaits it either way.
pub type Hook<S, Env> = Arc<dyn Fn(S) -> BoxedEffect<(), HookError, Env> + Send + Sync>;

/// Wrap an effect factory into a [`Hook`].
pub fn effect_hook<S, Env, F>(factory: F) -> Hook<S, Env>
where
    S: State + 'static,
    Env: Clone + Send + Sync + 'static,
    F: Fn(S) -> BoxedEffect<(), HookError, Env> + Send + Sync + 'static,
{
    Arc::new(factory)
}

/// Lift a plain synchronous callback into a [`Hook`].
///
/// The callback runs when the produced effect is run, and the effect
/// completes immediately afterwards.
///
/// # Example
///
/// ```rust
/// use statehooks::effects::hook_fn;
/// use statehooks::state_enum;
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// let on_open = hook_fn::<Door, (), _>(|state| println!("entered {:?}", state));
/// ```
pub fn hook_fn<S, Env, F>(callback: F) -> Hook<S, Env>
where
    S: State + 'static,
    Env: Clone + Send + Sync + 'static,
    F: Fn(&S) + Send + Sync + 'static,
{
    let callback = Arc::new(callback);
    Arc::new(move |state: S| {
        let callback = Arc::clone(&callback);
        from_fn(move |_env: &Env| {
            callback(&state);
            Ok::<(), HookError>(())
        })
        .boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use stillwater::effect::Effect;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        End,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::End => "End",
            }
        }
    }

    #[tokio::test]
    async fn hook_fn_runs_callback_with_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hook: Hook<TestState, ()> = hook_fn(move |s: &TestState| {
            sink.lock().unwrap().push(*s);
        });

        hook(TestState::End).run(&()).await.unwrap();
        hook(TestState::Start).run(&()).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![TestState::End, TestState::Start]);
    }

    #[tokio::test]
    async fn hook_fn_is_lazy_until_run() {
        let seen = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&seen);
        let hook: Hook<TestState, ()> = hook_fn(move |_s: &TestState| {
            *sink.lock().unwrap() += 1;
        });

        let effect = hook(TestState::Start);
        assert_eq!(*seen.lock().unwrap(), 0);

        effect.run(&()).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn failing_hook_surfaces_error() {
        let hook: Hook<TestState, ()> = effect_hook(|s: TestState| {
            fail(HookError::failed(format!("cannot enter {}", s.name()))).boxed()
        });

        let result = hook(TestState::End).run(&()).await;

        assert_eq!(result, Err(HookError::Failed("cannot enter End".to_string())));
    }

    #[tokio::test]
    async fn hook_reads_environment() {
        #[derive(Clone)]
        struct Env {
            allow: bool,
        }

        let hook: Hook<TestState, Env> = effect_hook(|_s: TestState| {
            from_fn(|env: &Env| {
                if env.allow {
                    Ok(())
                } else {
                    Err(HookError::failed("not allowed"))
                }
            })
            .boxed()
        });

        assert!(hook(TestState::Start).run(&Env { allow: true }).await.is_ok());
        assert!(hook(TestState::Start).run(&Env { allow: false }).await.is_err());
    }
}
