//! parley - interactive terminal client for parleyd.
//!
//! A thin wrapper over the wire protocol: a numbered menu on stdin, and a
//! background task copying every server line to stdout.

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;

#[derive(Debug, Parser)]
#[command(name = "parley", about = "Terminal client for the parley chat daemon")]
struct Args {
    /// Server IP address.
    #[arg(long, default_value = "127.0.0.1")]
    ip: String,

    /// Server port.
    #[arg(long, default_value_t = 8888)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let stream = TcpStream::connect((args.ip.as_str(), args.port)).await?;
    println!(">>> connected to {}:{}", args.ip, args.port);

    let (read_half, mut write_half) = stream.into_split();

    // Copy every server line to stdout until the connection closes.
    tokio::spawn(async move {
        let mut lines = BufReader::new(read_half).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            println!("{line}");
        }
        println!(">>> connection closed by server");
    });

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("1. public chat");
        println!("2. private chat");
        println!("3. rename");
        println!("0. quit");

        let Some(choice) = input.next_line().await? else {
            break;
        };
        match choice.trim() {
            "1" => public_chat(&mut input, &mut write_half).await?,
            "2" => private_chat(&mut input, &mut write_half).await?,
            "3" => rename(&mut input, &mut write_half).await?,
            "0" => break,
            _ => println!("enter a number between 0 and 3"),
        }
    }

    Ok(())
}

async fn send_line(writer: &mut OwnedWriteHalf, line: &str) -> anyhow::Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}

async fn public_chat<R>(input: &mut Lines<R>, writer: &mut OwnedWriteHalf) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("type to chat, exit to leave");
    while let Some(line) = input.next_line().await? {
        if line == "exit" {
            return Ok(());
        }
        if !line.is_empty() {
            send_line(writer, &line).await?;
        }
    }
    Ok(())
}

async fn private_chat<R>(input: &mut Lines<R>, writer: &mut OwnedWriteHalf) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    // Show who is online before asking for a recipient.
    send_line(writer, "who").await?;

    loop {
        println!("recipient name, exit to leave");
        let Some(name) = input.next_line().await? else {
            return Ok(());
        };
        if name == "exit" {
            return Ok(());
        }
        if name.is_empty() {
            continue;
        }

        println!("type to chat with {name}, exit to pick someone else");
        while let Some(line) = input.next_line().await? {
            if line == "exit" {
                break;
            }
            if !line.is_empty() {
                send_line(writer, &format!("to|{name}|{line}")).await?;
            }
        }
    }
}

async fn rename<R>(input: &mut Lines<R>, writer: &mut OwnedWriteHalf) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    println!("new name:");
    if let Some(name) = input.next_line().await? {
        if !name.is_empty() {
            send_line(writer, &format!("rename|{name}")).await?;
        }
    }
    Ok(())
}
