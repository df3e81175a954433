//! Interface de linha de comando do Orçamento.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Orçamento - orçamentos compostos com proxy de cache.
#[derive(Parser, Debug)]
#[command(name = "orcamento")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "orcamento.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Demonstra o proxy de cache sobre um orçamento aninhado.
    Demo {
        /// Quantidade de leituras pelo proxy.
        #[arg(short = 'n', long)]
        calls: Option<usize>,

        /// Latência simulada do cálculo, em milissegundos.
        #[arg(short, long)]
        delay_ms: Option<u64>,
    },

    /// Exporta um orçamento e um pedido de exemplo.
    Export {
        /// Formato do arquivo.
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Xml)]
        format: ExportFormat,

        /// Diretório de saída (padrão: o da configuração).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cria pedidos compartilhando dados extrínsecos.
    Orders {
        /// Quantidade de pedidos.
        #[arg(short = 'n', long, default_value_t = 10_000)]
        count: usize,
    },

    /// Finaliza e registra um orçamento de exemplo.
    Register,

    /// Mostra versão.
    Version,
}

/// Formatos de exportação.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Xml,
    Zip,
}
