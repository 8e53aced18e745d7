//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
A line-oriented logging sink.

The tracer emits exactly one [`LogRecord`] per begin/end/exception call and submits it,
synchronously, to every registered sink. Sinks must not propagate write failures back into
the traced flow; a sink that cannot write should deal with that itself.
*/
pub trait Logger: Debug + Send + Sync {
    /**
        Submits the log record for logging.
    */
    fn finish_log_record(&self, record: LogRecord);
}

/*
Boilerplate notes.

# Logger

I don't think Clone on Logger makes sense, so Copy's out.
PartialEq and Eq are possible but it's a little unclear if we mean data equality or some kind of provenance-based thing.  Let's avoid that and not implement it.
Ord makes no sense.
Default is not necessarily sensible since who knows how the sink is constructed (does it need a filename to log to, etc.)
Display is not very sensible.
Send/Sync are required: records are submitted from whichever thread the traced call runs on.
*/
