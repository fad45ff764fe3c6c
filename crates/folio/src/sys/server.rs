use crate::events::AppEvent;
use async_channel::Sender;
use orbit::control::{ControlCommand, SOCKET_PATH};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

pub async fn run_server(tx: Sender<AppEvent>) {
    // stale socket from a previous run
    if fs_err::metadata(SOCKET_PATH).is_ok()
        && let Err(e) = fs_err::remove_file(SOCKET_PATH)
    {
        log::warn!("{}", e);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind control socket {}: {}", SOCKET_PATH, e);
            return;
        }
    };
    log::info!("Listening on {}", SOCKET_PATH);

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                tokio::spawn(handle_client(stream, tx.clone()));
            }
            Err(e) => log::error!("Failed to accept connection: {}", e),
        }
    }
}

/// One command per line. Bad lines are logged and skipped; the connection
/// stays open until the client hangs up.
async fn handle_client(stream: UnixStream, tx: Sender<AppEvent>) {
    let mut lines = BufReader::new(stream).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ControlCommand>() {
            Ok(command) => {
                if tx.send(AppEvent::Control(command)).await.is_err() {
                    break;
                }
            }
            Err(e) => log::warn!("Control socket: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit::Destination;
    use tokio::io::AsyncWriteExt;

    fn command(event: AppEvent) -> ControlCommand {
        match event {
            AppEvent::Control(command) => command,
            other => panic!("expected a control command, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_lines_are_forwarded_in_order() {
        let (mut client, server) = UnixStream::pair().unwrap();
        let (tx, rx) = async_channel::unbounded();
        let handler = tokio::spawn(handle_client(server, tx));

        client
            .write_all(b"open\n\nbogus\ngoto /projects\n")
            .await
            .unwrap();
        assert_eq!(command(rx.recv().await.unwrap()), ControlCommand::Open);
        assert_eq!(
            command(rx.recv().await.unwrap()),
            ControlCommand::Goto(Destination::from("/projects"))
        );

        // the bad line did not end the connection
        client.write_all(b"close\n").await.unwrap();
        assert_eq!(command(rx.recv().await.unwrap()), ControlCommand::Close);

        drop(client);
        handler.await.unwrap();
        assert!(rx.is_empty());
    }
}
