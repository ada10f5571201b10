// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// GPU-accelerated template match counting for Sample Entropy.
// This module is compiled only when the `gpu_support` feature is enabled.

#![cfg(feature = "gpu_support")]

use bytemuck::{Pod, Zeroable};
use futures_intrusive::channel::shared::oneshot_channel;
use pollster::block_on;
use tracing::debug;
use wgpu::util::DeviceExt;

use crate::estimators::approaches::template::matching::{MatchCounts, template_count};

/// Below this many templates the device setup costs more than the CPU loop.
pub const GPU_MIN_TEMPLATES: usize = 2000;

const WORKGROUP_SIZE: u32 = 256;
const MAX_WORKGROUPS: u32 = 65_535;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct GpuConfig {
    n_templates: u32,
    m: u32,
    tol: f32,
    _padding: u32,
}

/// Count template matches on the GPU.
///
/// The series and tolerance are converted to `f32`, so pairs whose distance lies
/// within single-precision rounding of `tol` may be classified differently from
/// the CPU backends.
///
/// Returns `None` when the series is too short to be worthwhile, too long for a
/// single dispatch, or when no adapter/device is available; callers fall back to CPU.
pub fn gpu_count_matches(series: &[f64], m: usize, tol: f64) -> Option<MatchCounts> {
    let n_templates = template_count(series.len(), m);
    if n_templates < GPU_MIN_TEMPLATES {
        return None;
    }
    let wg_count = (n_templates as u64).div_ceil(WORKGROUP_SIZE as u64);
    if wg_count > MAX_WORKGROUPS as u64 || m > u32::MAX as usize {
        debug!(n_templates, "series exceeds a single GPU dispatch");
        return None;
    }

    let series_f32: Vec<f32> = series.iter().map(|&v| v as f32).collect();
    let cfg = GpuConfig {
        n_templates: n_templates as u32,
        m: m as u32,
        tol: tol as f32,
        _padding: 0,
    };

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = match block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: None,
        force_fallback_adapter: false,
    })) {
        Ok(adapter) => adapter,
        Err(e) => {
            debug!(error = %e, "no GPU adapter available");
            return None;
        }
    };

    let (device, queue) = match block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: Some("Template Match Device"),
        required_features: wgpu::Features::empty(),
        required_limits: wgpu::Limits::default(),
        memory_hints: wgpu::MemoryHints::default(),
        trace: wgpu::Trace::default(),
    })) {
        Ok(pair) => pair,
        Err(e) => {
            debug!(error = %e, "GPU device request failed");
            return None;
        }
    };

    let series_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Template Series Buffer"),
        contents: bytemuck::cast_slice(&series_f32),
        usage: wgpu::BufferUsages::STORAGE,
    });

    // One (cm, cm1) pair of u32 counters per template
    let out_size = (n_templates as u64) * std::mem::size_of::<[u32; 2]>() as u64;
    let output_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Template Counts Buffer"),
        size: out_size,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        mapped_at_creation: false,
    });

    let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Template Staging Buffer"),
        size: out_size,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let config_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Template Config Buffer"),
        contents: bytemuck::bytes_of(&cfg),
        usage: wgpu::BufferUsages::UNIFORM,
    });

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Template Match Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("template_match.wgsl").into()),
    });

    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Template Match BGL"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: false },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Template Match Pipeline Layout"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
        label: Some("Template Match Pipeline"),
        layout: Some(&pipeline_layout),
        module: &shader,
        entry_point: Some("main"),
        compilation_options: wgpu::PipelineCompilationOptions::default(),
        cache: None,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Template Match BG"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: series_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: output_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: config_buffer.as_entire_binding(),
            },
        ],
    });

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("Template Match Encoder"),
    });

    {
        let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("Template Match Compute Pass"),
            timestamp_writes: None,
        });
        cpass.set_pipeline(&pipeline);
        cpass.set_bind_group(0, &bind_group, &[]);
        cpass.dispatch_workgroups(wg_count as u32, 1, 1);
    }

    encoder.copy_buffer_to_buffer(&output_buffer, 0, &staging_buffer, 0, out_size);
    queue.submit(std::iter::once(encoder.finish()));

    let slice = staging_buffer.slice(..);
    let (sender, receiver) = oneshot_channel();
    slice.map_async(wgpu::MapMode::Read, move |v| {
        sender.send(v).ok();
    });
    device.poll(wgpu::PollType::Wait).ok()?;
    match block_on(receiver.receive()) {
        Some(Ok(())) => {}
        _ => return None,
    }
    let view = slice.get_mapped_range();
    let rows: Vec<[u32; 2]> = bytemuck::cast_slice(&view).to_vec();
    drop(view);
    staging_buffer.unmap();

    let mut counts = MatchCounts::default();
    for [cm, cm1] in rows {
        counts.cm += cm as u64;
        counts.cm1 += cm1 as u64;
    }
    Some(counts)
}
