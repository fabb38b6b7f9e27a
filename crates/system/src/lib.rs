//! `sysinfo`-backed hardware probe.

pub mod cpu;
pub mod gpu;
pub mod memory;

use cpu::{average_usage, LoadTracker, RefreshGate};
use hwmon_core::{HardwareProbe, HardwareReport, Result};
use std::time::Instant;
use sysinfo::{System, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::{debug, trace};

/// Hardware probe for the local machine.
///
/// CPU and GPU loads are sampled on `tick`, at most once per
/// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`, and averaged over each report
/// period. A report that arrives before the counters can be refreshed again
/// (sampling interval below that minimum, or several reports in one frame)
/// repeats the newest measured load; it never forces an early refresh, which
/// would only return the previous value under a new timestamp.
pub struct SysinfoProbe {
    sys:         System,
    gate:        RefreshGate,
    cpu:         LoadTracker,
    gpu:         LoadTracker,
    gpu_present: bool,
}

impl SysinfoProbe {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        // The baseline refresh above only primes sysinfo's counters.
        let mut gate = RefreshGate::new(MINIMUM_CPU_UPDATE_INTERVAL);
        gate.mark(Instant::now());

        let gpu_present = gpu::read_gpu_busy().is_some();
        if !gpu_present {
            debug!("No DRM gpu_busy_percent counter found; GPU load will read 0%");
        }

        Self {
            sys,
            gate,
            cpu: LoadTracker::new(),
            gpu: LoadTracker::new(),
            gpu_present,
        }
    }

    /// Refresh the load counters if the gate allows it.
    fn sample_loads(&mut self) {
        let now = Instant::now();
        if !self.gate.is_open(now) {
            return;
        }
        self.sys.refresh_cpu_usage();
        self.gate.mark(now);

        let per_core: Vec<f32> = self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        self.cpu.record(average_usage(&per_core));

        if self.gpu_present {
            if let Some(busy) = gpu::read_gpu_busy() {
                self.gpu.record(busy);
            }
        }
    }
}

impl Default for SysinfoProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareProbe for SysinfoProbe {
    fn tick(&mut self) {
        self.sample_loads();
    }

    fn generate_report(&mut self) -> Result<HardwareReport> {
        if !self.cpu.has_pending() {
            self.sample_loads();
        }
        if !self.cpu.has_pending() {
            trace!("load counters not refreshable yet; repeating newest reading");
        }
        self.sys.refresh_memory();

        let report = HardwareReport {
            cpu_load: self.cpu.report().unwrap_or(0.0),
            gpu_load: self.gpu.report().unwrap_or(0.0),
            ram_used: self.sys.used_memory(),
            ram_max:  self.sys.total_memory(),
        };
        debug!(
            cpu = report.cpu_load,
            gpu = report.gpu_load,
            ram_used = report.ram_used,
            ram_max = report.ram_max,
            "hardware report"
        );
        Ok(report)
    }

    fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(cpu) = self.sys.cpus().first() {
            lines.push(format!("CPU: {}", cpu.brand().trim()));
        }
        lines.push(format!("Logical cores: {}", self.sys.cpus().len()));
        lines.push(format!("RAM: {}", memory::format_bytes(self.sys.total_memory())));
        if let Some(os) = System::long_os_version() {
            lines.push(format!("OS: {os}"));
        }
        if !self.gpu_present {
            lines.push("GPU: no utilisation counter available".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_back_reports_do_not_force_a_refresh() {
        let mut probe = SysinfoProbe::new();
        probe.tick();
        let refreshed_at = probe.gate.last();

        let first = probe.generate_report().unwrap();
        let second = probe.generate_report().unwrap();

        assert_eq!(probe.gate.last(), refreshed_at);
        assert_eq!(first.cpu_load, second.cpu_load);
        assert!(!probe.cpu.has_pending());
    }
}
