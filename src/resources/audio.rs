//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and message resources. [`initialize_audio`]
//! loads and starts the default sound; [`destroy_audio`] halts every channel,
//! frees the sounds and joins the thread.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::resourcepaths::ResourcePaths;
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{info, warn};

/// Sound played by [`initialize_audio`].
pub const DEFAULT_SOUND: &str = "temp";

/// Shared bridge between the ECS world and the audio thread.
///
/// Systems can send commands via [`AudioBridge::tx_cmd`] and poll for
/// messages via [`AudioBridge::rx_msg`].
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the audio thread and register bridge resources.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    insert_bridge(world, tx_cmd, rx_msg, handle);
}

/// Register an already running audio backend with the world.
pub fn insert_bridge(
    world: &mut World,
    tx_cmd: Sender<AudioCmd>,
    rx_msg: Receiver<AudioMessage>,
    handle: std::thread::JoinHandle<()>,
) {
    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Load `<root>/audio/temp.wav` and play it once on a free channel.
pub fn initialize_audio(world: &mut World, paths: &ResourcePaths) {
    let Some(bridge) = world.get_resource::<AudioBridge>() else {
        warn!("initialize_audio called before setup_audio");
        return;
    };
    let path = paths.audio(DEFAULT_SOUND);
    info!("Initializing audio with {}", path.display());
    let _ = bridge.tx_cmd.send(AudioCmd::LoadFx {
        id: DEFAULT_SOUND.to_string(),
        path: path.to_string_lossy().into_owned(),
    });
    let _ = bridge.tx_cmd.send(AudioCmd::PlayFx {
        id: DEFAULT_SOUND.to_string(),
    });
}

/// Halt all channels, free every sound and shut the audio device down.
///
/// Safe to call when audio was never set up.
pub fn destroy_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::HaltAll);
        let _ = bridge.tx_cmd.send(AudioCmd::UnloadAllFx);
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
        info!("Audio shut down");
    }
}
