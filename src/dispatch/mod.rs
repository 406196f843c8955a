//! Check dispatch: runs one check against one entity and routes the
//! outcome through the interceptor chain.

pub mod builtins;

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::{debug, warn};

use crate::model::{Attributes, CheckConfig, Entity};

/// Externally registered logic that may replace a check's outcome.
///
/// Interceptors run in registration order and each receives the previous
/// one's output, so the last interceptor to change the value wins.
/// Implementations must be pure: same inputs, same answer.
pub trait CheckInterceptor: Send + Sync {
    fn intercept(
        &self,
        valid: bool,
        kind: &str,
        attributes: &Attributes,
        check_name: &str,
        entity: &Entity,
    ) -> bool;
}

struct FnInterceptor<F>(F);

impl<F> CheckInterceptor for FnInterceptor<F>
where
    F: Fn(bool, &str, &Attributes, &str, &Entity) -> bool + Send + Sync,
{
    fn intercept(
        &self,
        valid: bool,
        kind: &str,
        attributes: &Attributes,
        check_name: &str,
        entity: &Entity,
    ) -> bool {
        (self.0)(valid, kind, attributes, check_name, entity)
    }
}

#[derive(Default)]
pub struct Dispatcher {
    interceptors: Vec<Box<dyn CheckInterceptor>>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher::default()
    }

    /// Appends an interceptor to the end of the chain.
    pub fn register<I: CheckInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.push(Box::new(interceptor));
    }

    /// Closure form of [`Dispatcher::register`].
    pub fn intercept<F>(&mut self, f: F)
    where
        F: Fn(bool, &str, &Attributes, &str, &Entity) -> bool + Send + Sync + 'static,
    {
        self.register(FnInterceptor(f));
    }

    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Returns whether `entity` passes `check_name`.
    ///
    /// Disabled checks are skipped and report `true`. Names with no custom
    /// validator and no built-in pass unless an interceptor says otherwise.
    pub fn run_check(&self, entity: &Entity, check_name: &str, config: &CheckConfig) -> bool {
        if !config.enabled {
            return true;
        }
        let baseline = self.baseline(entity, check_name, config);
        self.apply_interceptors(baseline, entity, check_name)
    }

    /// Feeds `valid` through every interceptor in registration order.
    /// A panicking interceptor leaves the value unchanged.
    pub fn apply_interceptors(&self, valid: bool, entity: &Entity, check_name: &str) -> bool {
        self.interceptors
            .iter()
            .enumerate()
            .fold(valid, |current, (index, interceptor)| {
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    interceptor.intercept(
                        current,
                        &entity.kind,
                        &entity.attributes,
                        check_name,
                        entity,
                    )
                }));
                outcome.unwrap_or_else(|payload| {
                    warn!(
                        interceptor = index,
                        check = check_name,
                        entity = %entity.id,
                        "interceptor panicked: {}",
                        panic_message(&*payload)
                    );
                    current
                })
            })
    }

    fn baseline(&self, entity: &Entity, check_name: &str, config: &CheckConfig) -> bool {
        if let Some(validator) = &config.validator {
            let outcome =
                catch_unwind(AssertUnwindSafe(|| validator.call(&entity.attributes, entity)));
            return outcome.unwrap_or_else(|payload| {
                warn!(
                    check = check_name,
                    entity = %entity.id,
                    "custom validator panicked, treating as valid: {}",
                    panic_message(&*payload)
                );
                true
            });
        }

        match builtins::lookup(check_name) {
            Some(check) => check(&entity.attributes, entity),
            None => {
                debug!(
                    check = check_name,
                    kind = %entity.kind,
                    "no implementation for check, treating as valid"
                );
                true
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
