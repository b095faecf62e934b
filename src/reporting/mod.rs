mod report;

pub use report::ResamplingReport;
