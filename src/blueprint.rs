//! Skeleton of the game server project.
use crate::tree::{tree, Tree, TreeNode};

/// Where the skeleton is generated: the current working directory.
pub const BASE_PATH: &str = "./";

pub fn game_server() -> Tree {
    tree([
        ("package.json", TreeNode::file("")),
        (
            "server.js",
            TreeNode::file("// Arquivo principal do servidor"),
        ),
        (
            "config",
            TreeNode::directory([("database.js", TreeNode::file("// Configuração do SQLite"))]),
        ),
        (
            "routes",
            TreeNode::directory([
                ("auth.js", TreeNode::file("// Rotas de autenticação")),
                ("games.js", TreeNode::file("// Rotas de gerenciamento de jogos")),
                (
                    "users.js",
                    TreeNode::file("// Rotas de gerenciamento de usuários"),
                ),
            ]),
        ),
        (
            "services",
            TreeNode::directory([(
                "wikipediaService.js",
                TreeNode::file("// Integração com a API da Wikipédia"),
            )]),
        ),
        (
            "models",
            TreeNode::directory([
                ("User.js", TreeNode::file("// Modelo de usuário")),
                ("GameSession.js", TreeNode::file("// Modelo de sessão de jogo")),
                (
                    "PathHistory.js",
                    TreeNode::file("// Modelo de histórico de percurso"),
                ),
            ]),
        ),
        (
            "utils",
            TreeNode::directory([
                ("auth.js", TreeNode::file("// Funções de autenticação")),
                ("gameLogic.js", TreeNode::file("// Lógica do jogo")),
            ]),
        ),
    ])
}
