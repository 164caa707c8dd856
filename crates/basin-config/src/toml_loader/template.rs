//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Basin Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Basin"
# width = 1280             # 320-7680
# height = 720             # 240-4320
# startup_mode = "windowed" # windowed, maximized, fullscreen

[camera]
# fov_deg = 45.0           # 10-120
# near = 1.0
# far = 100.0
# position = [0.0, 10.0, 20.0]

[fog]
# enabled = true
# color = "#010305"
# near = 5.0
# far = 30.0

[lighting]
# ambient_color = "#ffffff"
# ambient_intensity = 1.0      # 0.0-4.0
# directional_color = "#ffffff"
# directional_intensity = 1.0  # 0.0-4.0
# directional_position = [0.0, 0.0, 100.0]

[water]
# enabled = true
# radius_scale = 0.9     # fraction of layout.radius
# height = 64.0
# radial_segments = 32     # 3-256
# height_segments = 32     # 1-256
# rotation_deg = [-90.0, 0.0, 90.0]
# sun_direction = [0.70707, 0.70707, 0.0]
# sun_color = "#9ecfe6"
# water_color = "#1877a3"
# distortion_scale = 2.0   # 0.0-20.0
# size = 1.0               # 0.01-100.0
# alpha = 1.0              # 0.0-1.0
# fog = true

[layout]
# count = 12               # one model file per item
# radius = 10.0
# center = [0.0, 0.0, 0.0]
# step_deg = 30.0          # count * step_deg should be 360
# reference_axis = [0.0, 0.0, -1.0]

[items]
# scale = 2.0
# emissive_intensity = 1.0

[palette]
# colors = [
#   "#00ff00", "#ff4422", "#2277ff", "#ff19c9", "#ff9819", "#53edce",
#   "#fc2399", "#68fc23", "#9723fc", "#fc6023", "#7623eb", "#4f72ff",
# ]

# [[rings]]
# name = "left"
# offset = [-3.0, 0.0, 0.0]
# rotation_deg = [-90.0, 0.0, 90.0]

# [[rings]]
# name = "right"
# offset = [3.0, 0.0, 0.0]
# rotation_deg = [90.0, 0.0, 90.0]

[bloom]
# enabled = true
# threshold = 0.01         # 0.0-1.0
# radius = 0.2             # 0.0-1.0
# base_strength = 1.0
# amplitude = 0.5
# frequency = 0.5
# random_scale = 0.75      # 0.0-1.0

[animation]
# skip_alternate_frames = true
# water_time_step = 0.016666668
# rotation_step = 0.01
# bloom_time_step = 0.01
# wheel_scale = 0.01
# wheel_line_delta = 120.0

[assets]
# base_dir = "."
# models_dir = "models"
# model_file_pattern = "text{N}.obj"
# water_normals = "img/waternormals.jpg"

[renderer]
# clear_color = "#010305"
# vsync = true
# log_fps = false

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
