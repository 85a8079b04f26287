//! Built-in license data.
//!
//! Texts and headers are compiled in from `licenses/`. Every `{copyright}` token is replaced with
//! the copyright line when a license is rendered.

use crate::registry::NONE_KEY;
use preface_domain::License;

struct Builtin {
    key: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    text: &'static str,
    header: &'static str,
}

const BUILTINS: &[Builtin] = &[
    Builtin { key: NONE_KEY, name: "None", aliases: &["none", "false"], text: "", header: "" },
    Builtin {
        key: "apache",
        name: "Apache 2.0",
        aliases: &["Apache-2.0", "apache", "apache20", "apache 2.0", "apache2.0"],
        text: include_str!("../licenses/apache.txt"),
        header: include_str!("../licenses/headers/apache.txt"),
    },
    Builtin {
        key: "mit",
        name: "MIT License",
        aliases: &["MIT", "mit"],
        text: include_str!("../licenses/mit.txt"),
        header: include_str!("../licenses/headers/mit.txt"),
    },
    Builtin {
        key: "bsd",
        name: "NewBSD",
        aliases: &["BSD-3-Clause", "bsd", "newbsd", "3 clause bsd", "3-clause bsd"],
        text: include_str!("../licenses/bsd.txt"),
        header: include_str!("../licenses/headers/bsd.txt"),
    },
    Builtin {
        key: "freebsd",
        name: "Simplified BSD License",
        aliases: &[
            "BSD-2-Clause",
            "freebsd",
            "simpbsd",
            "simple bsd",
            "2-clause bsd",
            "2 clause bsd",
            "simplified bsd license",
        ],
        text: include_str!("../licenses/freebsd.txt"),
        header: include_str!("../licenses/headers/freebsd.txt"),
    },
    Builtin {
        key: "gpl2",
        name: "GNU General Public License 2.0",
        aliases: &["GPL-2.0", "gpl2", "gnu gpl2", "gplv2"],
        text: include_str!("../licenses/gpl2.txt"),
        header: include_str!("../licenses/headers/gpl2.txt"),
    },
    Builtin {
        key: "gpl3",
        name: "GNU General Public License 3.0",
        aliases: &["GPL-3.0", "gpl3", "gplv3", "gpl", "gnu gpl3", "gnu gpl"],
        text: include_str!("../licenses/gpl3.txt"),
        header: include_str!("../licenses/headers/gpl3.txt"),
    },
    Builtin {
        key: "lgpl",
        name: "GNU Lesser General Public License",
        aliases: &["LGPL-3.0", "lgpl", "lesser gpl", "gnu lgpl"],
        text: include_str!("../licenses/lgpl.txt"),
        header: include_str!("../licenses/headers/lgpl.txt"),
    },
    Builtin {
        key: "agpl",
        name: "GNU Affero General Public License",
        aliases: &["AGPL-3.0", "agpl", "affero gpl", "gnu agpl"],
        text: include_str!("../licenses/agpl.txt"),
        header: include_str!("../licenses/headers/agpl.txt"),
    },
];

/// Yields `(key, license)` pairs for the compiled-in catalog, `none` first.
pub(crate) fn builtin() -> impl Iterator<Item = (&'static str, License)> {
    BUILTINS.iter().map(|b| {
        (b.key, License::new(b.name, b.aliases.iter().copied(), b.text, b.header))
    })
}
