//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`forward_audio_cmds`] hands ECS-written commands to the thread.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue each frame.
//!
//! Raylib audio calls stay on one thread; the game thread only talks to it
//! through channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending messages from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Initializes the audio device, owns every `Sound`, and reacts to commands
/// until [`AudioCmd::Shutdown`]. Sounds are dropped before the device.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] failed to initialize audio device: {}", e);
            // Keep draining so senders never block on a dead thread.
            for cmd in rx_cmd.iter() {
                match cmd {
                    AudioCmd::LoadFx { id, .. } => {
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: "no audio device".to_string(),
                        });
                    }
                    AudioCmd::Shutdown => break,
                    _ => {}
                }
            }
            return;
        }
    };

    info!("[audio] thread starting (id={:?})", std::thread::current().id());

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("[audio] fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        error!(
                            "[audio] fx load failed id='{}' path='{}' error='{}'",
                            id, path, e
                        );
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        debug!("[audio] fx play id='{}'", id);
                        sound.play();
                        playing.insert(id);
                    } else {
                        warn!("[audio] fx play failed id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::HaltAll => {
                    debug!("[audio] halt all");
                    for sound in sounds.values() {
                        sound.stop();
                    }
                    playing.clear();
                }
                AudioCmd::UnloadAllFx => {
                    debug!("[audio] fx unload all");
                    sounds.clear();
                    playing.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    for sound in sounds.values() {
                        sound.stop();
                    }
                    sounds.clear();
                    playing.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                    break 'run;
                }
            }
        }

        // Report sounds that stopped on their own exactly once.
        let finished: Vec<String> = playing
            .iter()
            .filter(|id| !sounds.get(*id).map(|s| s.is_playing()).unwrap_or(false))
            .cloned()
            .collect();
        for id in finished {
            debug!("[audio] fx finished id='{}'", id);
            playing.remove(&id);
            let _ = tx_msg.send(AudioMessage::FxFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!("[audio] thread exiting (id={:?})", std::thread::current().id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::audio::insert_bridge;
    use bevy_ecs::prelude::*;
    use bevy_ecs::system::SystemState;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_commands_are_forwarded_and_replies_polled() {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
        let mut world = World::new();
        insert_bridge(&mut world, tx_cmd, rx_msg, std::thread::spawn(|| {}));

        {
            let mut state = SystemState::<MessageWriter<AudioCmd>>::new(&mut world);
            let mut writer = state.get_mut(&mut world);
            writer.write(AudioCmd::PlayFx { id: "temp".into() });
            state.apply(&mut world);
        }
        tx_msg
            .send(AudioMessage::FxLoaded { id: "temp".into() })
            .unwrap();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                update_bevy_audio_cmds,
                forward_audio_cmds,
                poll_audio_messages,
                update_bevy_audio_messages,
            )
                .chain(),
        );
        schedule.run(&mut world);

        assert_eq!(
            rx_cmd.try_recv().unwrap(),
            AudioCmd::PlayFx { id: "temp".into() }
        );
        assert!(rx_cmd.try_recv().is_err());

        let mut state = SystemState::<MessageReader<AudioMessage>>::new(&mut world);
        let mut reader = state.get_mut(&mut world);
        let got: Vec<_> = reader.read().cloned().collect();
        assert_eq!(got, vec![AudioMessage::FxLoaded { id: "temp".into() }]);
    }
}
