//! The signal value bridge: existence check, backdoor write, and backdoor read.

use std::sync::OnceLock;

use backdoor_common::{chunk_count, ChunkEncoding, LogicVec, VecVal};
use backdoor_config::{BridgeConfig, DEFAULT_MAX_WIDTH, DEFAULT_MAX_WIDTH_PARAM};

use crate::error::BackdoorError;
use crate::host::SimHost;
use crate::limits::AccessLimits;

/// Reads and writes host signals by hierarchical path.
///
/// The encoding is fixed at construction. The width limit is resolved from
/// the host on the first read or write (unless supplied up front with
/// [`SignalBridge::with_limits`]) and then stays fixed for the lifetime of
/// the bridge, even if the host-side override changes later.
#[derive(Debug)]
pub struct SignalBridge {
    encoding: ChunkEncoding,
    default_max_width: u32,
    max_width_param: String,
    limits: OnceLock<AccessLimits>,
}

/// A path that resolved and passed the width check.
struct Located<Handle> {
    handle: Handle,
    width: u32,
    chunks: usize,
}

impl SignalBridge {
    /// Creates a bridge with the default width limit settings.
    pub fn new(encoding: ChunkEncoding) -> Self {
        Self {
            encoding,
            default_max_width: DEFAULT_MAX_WIDTH,
            max_width_param: DEFAULT_MAX_WIDTH_PARAM.to_string(),
            limits: OnceLock::new(),
        }
    }

    /// Creates a bridge from the `[bridge]` section of `backdoor.toml`.
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self {
            encoding: config.encoding,
            default_max_width: config.default_max_width,
            max_width_param: config.max_width_param.clone(),
            limits: OnceLock::new(),
        }
    }

    /// Fixes the width limit now instead of resolving it from the host.
    pub fn with_limits(self, limits: AccessLimits) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(limits);
        Self {
            limits: cell,
            ..self
        }
    }

    /// Returns the chunk encoding applied on every access.
    pub fn encoding(&self) -> ChunkEncoding {
        self.encoding
    }

    /// Returns the effective width limit, resolving it from `host` on first use.
    pub fn limits<H: SimHost>(&self, host: &H) -> &AccessLimits {
        self.limits.get_or_init(|| {
            AccessLimits::resolve(host, &self.max_width_param, self.default_max_width)
        })
    }

    /// Returns true if `path` resolves in the host namespace.
    pub fn exists<H: SimHost>(&self, host: &H, path: &str) -> bool {
        host.handle_by_name(path).is_some()
    }

    /// Returns the chunk count of a fixed-size testbench buffer for `path`.
    ///
    /// Testbenches declare value buffers `max_width` bits wide, so this is
    /// `chunk_count(max_width)`. The path is resolved before the limit, so an
    /// unknown path fails with [`BackdoorError::PathNotFound`] and never
    /// triggers the host-side override lookup.
    pub fn buffer_chunks<H: SimHost>(&self, host: &H, path: &str) -> Result<usize, BackdoorError> {
        if host.handle_by_name(path).is_none() {
            return Err(BackdoorError::PathNotFound {
                path: path.to_string(),
            });
        }
        Ok(chunk_count(self.limits(host).max_width()))
    }

    /// Deposits `value` into the signal at `path` with no scheduling delay.
    ///
    /// `value` must hold at least `chunk_count(width)` chunks; extra chunks
    /// are ignored.
    pub fn write<H: SimHost>(
        &self,
        host: &mut H,
        path: &str,
        value: &[VecVal],
    ) -> Result<(), BackdoorError> {
        let located = self.locate(host, path)?;
        self.write_located(host, path, &located, value)
    }

    /// Copies the current value of the signal at `path` into `out`.
    ///
    /// Exactly `chunk_count(width)` chunks are written; any further chunks in
    /// `out` are left untouched.
    pub fn read<H: SimHost>(
        &self,
        host: &H,
        path: &str,
        out: &mut [VecVal],
    ) -> Result<(), BackdoorError> {
        let located = self.locate(host, path)?;
        self.read_located(host, path, &located, out)
    }

    /// Writes a [`LogicVec`], zero-extending or truncating it to the signal width.
    pub fn write_logic<H: SimHost>(
        &self,
        host: &mut H,
        path: &str,
        value: &LogicVec,
    ) -> Result<(), BackdoorError> {
        let located = self.locate(host, path)?;
        let sized = LogicVec::from_vecvals(located.width, value.as_vecvals());
        self.write_located(host, path, &located, sized.as_vecvals())
    }

    /// Reads the signal at `path` as a [`LogicVec`] of the signal's width.
    pub fn read_logic<H: SimHost>(&self, host: &H, path: &str) -> Result<LogicVec, BackdoorError> {
        let located = self.locate(host, path)?;
        let mut chunks = vec![VecVal::default(); located.chunks];
        self.read_located(host, path, &located, &mut chunks)?;
        Ok(LogicVec::from_vecvals(located.width, &chunks))
    }

    fn write_located<H: SimHost>(
        &self,
        host: &mut H,
        path: &str,
        located: &Located<H::Handle>,
        value: &[VecVal],
    ) -> Result<(), BackdoorError> {
        if value.len() < located.chunks {
            return Err(BackdoorError::BufferTooShort {
                path: path.to_string(),
                needed: located.chunks,
                provided: value.len(),
            });
        }
        log::trace!("write {path} ({} bits, {})", located.width, self.encoding);
        let value = &value[..located.chunks];
        match self.encoding {
            ChunkEncoding::Native => host.put_vector(&located.handle, value),
            ChunkEncoding::Swapped => {
                let scratch: Vec<VecVal> = value.iter().map(|c| c.swapped()).collect();
                host.put_vector(&located.handle, &scratch);
            }
        }
        Ok(())
    }

    fn read_located<H: SimHost>(
        &self,
        host: &H,
        path: &str,
        located: &Located<H::Handle>,
        out: &mut [VecVal],
    ) -> Result<(), BackdoorError> {
        if out.len() < located.chunks {
            return Err(BackdoorError::BufferTooShort {
                path: path.to_string(),
                needed: located.chunks,
                provided: out.len(),
            });
        }
        log::trace!("read {path} ({} bits, {})", located.width, self.encoding);
        let current = host.get_vector(&located.handle);
        if current.len() < located.chunks {
            log::warn!(
                "host returned {} chunks for '{path}', expected {}; padding with zero",
                current.len(),
                located.chunks
            );
        }
        for (i, slot) in out[..located.chunks].iter_mut().enumerate() {
            let chunk = current.get(i).copied().unwrap_or_default();
            *slot = self.encoding.convert(chunk);
        }
        Ok(())
    }

    /// Resolves `path` and checks its width against the limit.
    fn locate<H: SimHost>(
        &self,
        host: &H,
        path: &str,
    ) -> Result<Located<H::Handle>, BackdoorError> {
        let handle = host
            .handle_by_name(path)
            .ok_or_else(|| BackdoorError::PathNotFound {
                path: path.to_string(),
            })?;
        let limits = self.limits(host);
        let width = host.size(&handle);
        let chunks = limits.check(path, width)?;
        Ok(Located {
            handle,
            width,
            chunks,
        })
    }
}

impl Default for SignalBridge {
    fn default() -> Self {
        Self::new(ChunkEncoding::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::WidthSource;
    use crate::testing::FakeHost;
    use backdoor_common::Logic;

    const PARAM: &str = "uvm_register_pkg::UVM_REGISTER_MAX_WIDTH";

    #[test]
    fn exists_reports_presence() {
        let host = FakeHost::default().with_signal("top.a", 8);
        let bridge = SignalBridge::default();
        assert!(bridge.exists(&host, "top.a"));
        assert!(!bridge.exists(&host, "top.b"));
        assert_eq!(host.lookups.get(), 2);
        assert_eq!(host.value_accesses(), 0);
    }

    #[test]
    fn native_write_then_read() {
        let mut host = FakeHost::default().with_signal("top.r", 48);
        let bridge = SignalBridge::new(ChunkEncoding::Native);
        let value = [VecVal::new(0xDEAD_BEEF, 0), VecVal::new(0x1234, 0x0F00)];
        bridge.write(&mut host, "top.r", &value).unwrap();
        assert_eq!(host.raw("top.r"), &value);

        let mut out = [VecVal::default(); 2];
        bridge.read(&host, "top.r", &mut out).unwrap();
        assert_eq!(out, value);
    }

    #[test]
    fn swapped_write_is_observed_inverted_by_host() {
        let mut host = FakeHost::default().with_signal("top.r", 32);
        let bridge = SignalBridge::new(ChunkEncoding::Swapped);
        bridge
            .write(&mut host, "top.r", &[VecVal::new(0xAAAA_AAAA, 0x5555_5555)])
            .unwrap();
        assert_eq!(host.raw("top.r"), &[VecVal::new(0x5555_5555, 0xAAAA_AAAA)]);

        let mut out = [VecVal::default()];
        bridge.read(&host, "top.r", &mut out).unwrap();
        assert_eq!(out, [VecVal::new(0xAAAA_AAAA, 0x5555_5555)]);
    }

    #[test]
    fn swapped_scratch_buffer_fully_overwritten() {
        let mut host = FakeHost::default().with_signal("top.wide", 1024);
        let bridge = SignalBridge::new(ChunkEncoding::Swapped);
        let value: Vec<VecVal> = (0..32u32)
            .map(|i| VecVal::new(i.wrapping_mul(0x0101_0101), !i))
            .collect();
        bridge.write(&mut host, "top.wide", &value).unwrap();

        let submitted = &host.puts[0];
        assert_eq!(submitted.len(), 32);
        for (sent, orig) in submitted.iter().zip(&value) {
            assert_eq!(*sent, orig.swapped());
        }
    }

    #[test]
    fn write_ignores_extra_chunks() {
        let mut host = FakeHost::default().with_signal("top.r", 8);
        let bridge = SignalBridge::default();
        let value = [VecVal::from_u32(0xAB), VecVal::from_u32(0xFFFF)];
        bridge.write(&mut host, "top.r", &value).unwrap();
        assert_eq!(host.puts[0], vec![VecVal::from_u32(0xAB)]);
    }

    #[test]
    fn read_leaves_trailing_chunks_untouched() {
        let mut host = FakeHost::default().with_signal("top.r", 32);
        host.set_raw("top.r", &[VecVal::from_u32(7)]);
        let bridge = SignalBridge::default();
        let sentinel = VecVal::new(0xFFFF_FFFF, 0xFFFF_FFFF);
        let mut out = [sentinel; 3];
        bridge.read(&host, "top.r", &mut out).unwrap();
        assert_eq!(out, [VecVal::from_u32(7), sentinel, sentinel]);
    }

    #[test]
    fn read_pads_short_host_value() {
        let mut host = FakeHost::default().with_signal("top.r", 64);
        host.set_raw("top.r", &[VecVal::from_u32(1)]);
        let bridge = SignalBridge::default();
        let mut out = [VecVal::new(9, 9); 2];
        bridge.read(&host, "top.r", &mut out).unwrap();
        assert_eq!(out, [VecVal::from_u32(1), VecVal::default()]);
    }

    #[test]
    fn missing_path_is_error_without_value_access() {
        let mut host = FakeHost::default().with_signal("top.a", 8);
        let bridge = SignalBridge::default();
        let expected = BackdoorError::PathNotFound {
            path: "top.nope".into(),
        };

        let err = bridge
            .write(&mut host, "top.nope", &[VecVal::default()])
            .unwrap_err();
        assert_eq!(err, expected);

        let mut out = [VecVal::default()];
        let err = bridge.read(&host, "top.nope", &mut out).unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(host.value_accesses(), 0);
    }

    #[test]
    fn missing_path_does_not_resolve_limits() {
        let host = FakeHost::default().with_param(PARAM, 64);
        let bridge = SignalBridge::default();
        let mut out = [VecVal::default()];
        assert!(bridge.read(&host, "top.nope", &mut out).is_err());
        assert_eq!(host.int_reads.get(), 0);
    }

    #[test]
    fn over_wide_signal_is_error_without_value_access() {
        let mut host = FakeHost::default().with_signal("top.mem", 1025);
        let bridge = SignalBridge::default();
        let value = vec![VecVal::default(); 33];
        let expected = BackdoorError::WidthExceeded {
            path: "top.mem".into(),
            width: 1025,
            max_width: 1024,
        };
        assert_eq!(bridge.write(&mut host, "top.mem", &value), Err(expected.clone()));
        let mut out = vec![VecVal::default(); 33];
        assert_eq!(bridge.read(&host, "top.mem", &mut out), Err(expected));
        assert_eq!(host.value_accesses(), 0);
    }

    #[test]
    fn short_buffer_is_error_without_value_access() {
        let mut host = FakeHost::default().with_signal("top.r", 40);
        let bridge = SignalBridge::default();
        let expected = BackdoorError::BufferTooShort {
            path: "top.r".into(),
            needed: 2,
            provided: 1,
        };
        assert_eq!(
            bridge.write(&mut host, "top.r", &[VecVal::default()]),
            Err(expected.clone())
        );
        let mut out = [VecVal::default()];
        assert_eq!(bridge.read(&host, "top.r", &mut out), Err(expected));
        assert_eq!(host.value_accesses(), 0);
    }

    #[test]
    fn limits_resolved_once() {
        let mut host = FakeHost::default()
            .with_param(PARAM, 2048)
            .with_signal("top.big", 2000);
        let bridge = SignalBridge::default();
        let value = vec![VecVal::default(); 63];
        bridge.write(&mut host, "top.big", &value).unwrap();
        assert_eq!(bridge.limits(&host).max_width(), 2048);
        assert_eq!(host.int_reads.get(), 1);

        host.set_param(PARAM, 16);
        let mut out = vec![VecVal::default(); 63];
        bridge.read(&host, "top.big", &mut out).unwrap();
        assert_eq!(bridge.limits(&host).max_width(), 2048);
        assert_eq!(host.int_reads.get(), 1);
    }

    #[test]
    fn configured_param_and_default() {
        let config = BridgeConfig {
            encoding: ChunkEncoding::Swapped,
            default_max_width: 16,
            max_width_param: "tb::W".into(),
        };
        let mut host = FakeHost::default().with_signal("top.r", 17);
        let bridge = SignalBridge::from_config(&config);
        assert_eq!(bridge.encoding(), ChunkEncoding::Swapped);
        let err = bridge
            .write(&mut host, "top.r", &[VecVal::default()])
            .unwrap_err();
        assert!(matches!(err, BackdoorError::WidthExceeded { max_width: 16, .. }));

        let host = FakeHost::default().with_param("tb::W", 99);
        let bridge = SignalBridge::from_config(&config);
        assert_eq!(bridge.limits(&host).max_width(), 99);
    }

    #[test]
    fn explicit_limits_skip_host_query() {
        let host = FakeHost::default()
            .with_param(PARAM, 2048)
            .with_signal("top.r", 8);
        let bridge = SignalBridge::default().with_limits(AccessLimits::new(8));
        let mut out = [VecVal::default()];
        bridge.read(&host, "top.r", &mut out).unwrap();
        assert_eq!(bridge.limits(&host).source(), WidthSource::Explicit);
        assert_eq!(host.int_reads.get(), 0);
    }

    #[test]
    fn buffer_chunks_follow_max_width() {
        let host = FakeHost::default()
            .with_param(PARAM, 64)
            .with_signal("top.r", 8);
        let bridge = SignalBridge::default();
        assert_eq!(bridge.buffer_chunks(&host, "top.r"), Ok(2));
        assert_eq!(host.int_reads.get(), 1);

        let host = FakeHost::default().with_signal("top.r", 8);
        assert_eq!(SignalBridge::default().buffer_chunks(&host, "top.r"), Ok(32));
    }

    #[test]
    fn buffer_chunks_resolves_path_before_limits() {
        let host = FakeHost::default().with_param(PARAM, 64);
        let bridge = SignalBridge::default();
        assert_eq!(
            bridge.buffer_chunks(&host, "top.nope"),
            Err(BackdoorError::PathNotFound {
                path: "top.nope".into()
            })
        );
        assert_eq!(host.int_reads.get(), 0);
        assert_eq!(host.value_accesses(), 0);
    }

    #[test]
    fn logic_access_resolves_path_once() {
        let mut host = FakeHost::default().with_signal("top.r", 8);
        let bridge = SignalBridge::default().with_limits(AccessLimits::new(64));
        bridge
            .write_logic(&mut host, "top.r", &LogicVec::from_u64(0x5A, 8))
            .unwrap();
        assert_eq!(host.lookups.get(), 1);
        assert_eq!(bridge.read_logic(&host, "top.r").unwrap().to_u64(), Some(0x5A));
        assert_eq!(host.lookups.get(), 2);
    }

    #[test]
    fn logic_vec_roundtrip_resizes_to_signal() {
        let mut host = FakeHost::default().with_signal("top.r", 6);
        let bridge = SignalBridge::new(ChunkEncoding::Swapped);
        let value = LogicVec::from_binary_str("1XZ0").unwrap();
        bridge.write_logic(&mut host, "top.r", &value).unwrap();

        let back = bridge.read_logic(&host, "top.r").unwrap();
        assert_eq!(back.width(), 6);
        assert_eq!(format!("{back}"), "001XZ0");
        assert_eq!(back.get(2), Logic::X);
    }
}
