use std::sync::Arc;

use kamus_types::{AppEvent, LookupRequest};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::AsyncBufReadExt;
use tokio_util::sync::CancellationToken;

use crate::session::Session;

const HELP: &str = "\
Perintah:
  <kata>                cari kata
  :wotd                 kata hari ini
  :acak                 kata acak
  :riwayat              tampilkan riwayat
  :hapus <kata>         hapus satu kata dari riwayat
  :bersihkan            bersihkan seluruh riwayat
  :tandai               tandai / hapus tanda hasil terakhir
  :daftar               daftar kata bertanda
  :hapus-tanda <kata>   hapus tanda dari satu kata
  :keluar               tutup";

enum LineAction {
    Quit,
    Nothing,
    Send(AppEvent),
}

/// Terminal frontend: forwards commands to the event loop and renders the
/// notices coming back.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    session: Arc<Session>,
    initial: Option<LookupRequest>,
    interactive: bool,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    session.open();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let verbose = interactive && atty::is(atty::Stream::Stdin);

    if let Some(request) = initial {
        ui_to_app_tx.send(AppEvent::Lookup(request)).await?;
    } else if verbose {
        println!("{HELP}");
    }

    // The last successful lemma backs the favorite toggle.
    let mut current_lemma: Option<String> = None;
    let mut pending_toggle: Option<String> = None;
    let mut want_history_list = false;
    let mut want_favorites_list = false;

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let event = event?;
                if !session.is_open() {
                    // completion arrived after dismissal; nothing to touch
                    tracing::debug!("dropping notice after close: {event:?}");
                    continue;
                }

                match event {
                    AppEvent::LookupStarted => println!("Memuat..."),
                    AppEvent::LookupSucceeded { rendered, lemma, is_favorite } => {
                        // focus the result so it is read out immediately
                        session.focus();
                        println!("{rendered}");
                        if verbose {
                            if is_favorite {
                                println!("({lemma} bertanda)");
                            }
                            println!("Selesai.");
                        }
                        current_lemma = Some(lemma);
                        if !interactive {
                            break;
                        }
                    }
                    AppEvent::LookupFailed { message } => {
                        // audible failure cue, then the message itself
                        eprint!("\x07");
                        println!("{message}");
                        if !interactive {
                            break;
                        }
                    }
                    AppEvent::HistoryChanged(list) => {
                        if want_history_list {
                            want_history_list = false;
                            print_list("Riwayat", &list);
                        }
                    }
                    AppEvent::FavoritesChanged(list) => {
                        if let Some(lemma) = pending_toggle.take() {
                            if list.iter().any(|l| *l == lemma) {
                                println!("Ditandai.");
                            } else {
                                println!("Dihapus dari tandai.");
                            }
                        }
                        if want_favorites_list {
                            want_favorites_list = false;
                            print_list("Ditandai", &list);
                        }
                    }
                    other => {
                        tracing::debug!("ignoring event not meant for the frontend: {other:?}");
                    }
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match parse_line(line.trim(), current_lemma.as_deref()) {
                        LineAction::Quit => break,
                        LineAction::Nothing => {}
                        LineAction::Send(event) => {
                            match &event {
                                AppEvent::ToggleFavorite { lemma } => {
                                    pending_toggle = Some(lemma.clone());
                                }
                                AppEvent::ShowHistory
                                | AppEvent::DeleteHistoryItem { .. }
                                | AppEvent::ClearHistory => want_history_list = true,
                                AppEvent::ShowFavorites
                                | AppEvent::DeleteFavorite { .. } => want_favorites_list = true,
                                _ => {}
                            }
                            ui_to_app_tx.send(event).await?;
                        }
                    },
                    None => {
                        stdin_open = false;
                        if interactive {
                            break;
                        }
                        // one-shot mode keeps waiting for its result
                    }
                }
            }
            _ = cancel.cancelled() => break,
        }
    }

    ui_to_app_tx.send(AppEvent::Close).await.ok();
    session.close();
    Ok(())
}

fn parse_line(line: &str, current_lemma: Option<&str>) -> LineAction {
    if line.is_empty() {
        return LineAction::Nothing;
    }

    match line {
        ":keluar" | ":q" => LineAction::Quit,
        ":wotd" => LineAction::Send(AppEvent::Lookup(LookupRequest::WordOfTheDay)),
        ":acak" => LineAction::Send(AppEvent::Lookup(LookupRequest::Random)),
        ":riwayat" => LineAction::Send(AppEvent::ShowHistory),
        ":bersihkan" => LineAction::Send(AppEvent::ClearHistory),
        ":daftar" => LineAction::Send(AppEvent::ShowFavorites),
        ":tandai" => match current_lemma {
            Some(lemma) => LineAction::Send(AppEvent::ToggleFavorite {
                lemma: lemma.to_string(),
            }),
            None => {
                println!("Belum ada hasil untuk ditandai.");
                LineAction::Nothing
            }
        },
        _ => {
            if let Some(lemma) = line.strip_prefix(":hapus-tanda ") {
                LineAction::Send(AppEvent::DeleteFavorite {
                    lemma: lemma.trim().to_string(),
                })
            } else if let Some(lemma) = line.strip_prefix(":hapus ") {
                LineAction::Send(AppEvent::DeleteHistoryItem {
                    lemma: lemma.trim().to_string(),
                })
            } else if line.starts_with(':') {
                println!("Perintah tidak dikenal: {line}");
                println!("{HELP}");
                LineAction::Nothing
            } else {
                LineAction::Send(AppEvent::Lookup(LookupRequest::Term(line.to_string())))
            }
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        println!("{title}: kosong");
        return;
    }

    println!("{title}:");
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {item}", i + 1);
    }
}
