//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# tracewise

tracewise is a lightweight call-tracing facility for Rust.

# Development status

tracewise is experimental and the API may change.

# The problem

Suppose a request flows through a controller, a service, and a repository. Each layer logs
a line or two. Now two requests arrive at once, and the log is an interleaved mess: which
`save() completed` belongs to which request? The classic fix is to thread a request id
through every function signature, which pollutes every API in the program with a parameter
that has nothing to do with its job.

tracewise solves this with an ambient trace context: a short correlation id plus a nesting
level, created when the outermost traced call begins, shared by every nested call, and torn
down exactly when the outermost call completes. Wrapped calls produce log lines like

```text
[b6kPrf91]save order
[b6kPrf91]|-->insert row
[b6kPrf91]|<--insert row time=12ms
[b6kPrf91]save order time=14ms
```

so one logical flow reads as one visually nested block, no matter what else is running.

# The two holders

The crate ships two interchangeable strategies for *where* the current trace state lives,
both behind the [`holder::ContextHolder`] trait:

* [`holder::SharedSlotHolder`] — one slot for the whole process. Correct only when exactly
  one logical flow runs at a time; concurrent flows corrupt each other's id and level.
  It exists as the documented baseline that shows why isolation matters.
* [`holder::ThreadScopedHolder`] — one private slot per thread. Concurrent flows never
  observe each other, and a slot is removed outright when its trace unwinds, so a reused
  thread always starts a fresh correlation id.

Select one at construction time; the [`Tracer`] facade is identical over both.

# The API

```rust
use tracewise::Tracer;

let tracer = Tracer::thread_scoped();
let span = tracer.begin("save order");
// ... do the work ...
tracer.end(span);
```

A failed unit of work is completed with [`Tracer::exception`] (or [`Tracer::fail`] when
only a message is at hand), and the error is then re-raised by the caller: tracing observes
business failures, it never handles them.

# The output

Each begin/end/exception call emits exactly one line through the [`Logger`] sinks
registered in [`global_logger`]. By default that is stderr; tests typically install an
[`InMemoryLogger`] instead.

# Caller discipline

Spans must be ended in strict reverse order of being begun, on the context that begun
them. The holders do not police this; an unbalanced pair silently desynchronizes the level
for that context (and, on the shared slot, for the whole process). Debug builds assert on
the violations that are cheap to detect.
*/

mod error;
pub mod global_logger;
pub mod holder;
mod identity;
mod inmemory_logger;
mod level;
mod log_record;
mod logger;
mod span;
mod stderror_logger;
mod tracer;

pub use error::BusinessError;
pub use global_logger::{add_global_logger, global_loggers, set_global_loggers};
pub use identity::{CorrelationId, TraceIdentity};
pub use inmemory_logger::InMemoryLogger;
pub use level::Level;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use span::TraceSpan;
pub use tracer::Tracer;
