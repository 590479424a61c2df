// SPDX-License-Identifier: MPL-2.0
use iced_shutter::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        device: args.opt_value_from_str("--device").unwrap_or(None),
        synthetic_camera: args.contains("--synthetic-camera"),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    app::run(flags)
}
