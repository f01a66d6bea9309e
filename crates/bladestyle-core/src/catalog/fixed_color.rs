//! Named solid colours.

use crate::style_type::Category;

constants! { Category::Color;
    BLACK => "Black", "Black";
    WHITE => "White", "White";
    RED => "Red", "Red";
    GREEN => "Green", "Green";
    BLUE => "Blue", "Blue";
    YELLOW => "Yellow", "Yellow";
    CYAN => "Cyan", "Cyan";
    MAGENTA => "Magenta", "Magenta";
    ALICE_BLUE => "AliceBlue", "Alice Blue";
    AQUAMARINE => "Aquamarine", "Aquamarine";
    AZURE => "Azure", "Azure";
    CHARTREUSE => "Chartreuse", "Chartreuse";
    CORAL => "Coral", "Coral";
    DARK_ORANGE => "DarkOrange", "Dark Orange";
    DEEP_PINK => "DeepPink", "Deep Pink";
    DEEP_SKY_BLUE => "DeepSkyBlue", "Deep Sky Blue";
    DODGER_BLUE => "DodgerBlue", "Dodger Blue";
    FLORAL_WHITE => "FloralWhite", "Floral White";
    GHOST_WHITE => "GhostWhite", "Ghost White";
    HOT_PINK => "HotPink", "Hot Pink";
    LEMON_CHIFFON => "LemonChiffon", "Lemon Chiffon";
    LIGHT_CYAN => "LightCyan", "Light Cyan";
    LIGHT_PINK => "LightPink", "Light Pink";
    LIGHT_SALMON => "LightSalmon", "Light Salmon";
    LIGHT_YELLOW => "LightYellow", "Light Yellow";
    MOCCASIN => "Moccasin", "Moccasin";
    NAVAJO_WHITE => "NavajoWhite", "Navajo White";
    ORANGE => "Orange", "Orange";
    ORANGE_RED => "OrangeRed", "Orange Red";
    PAPAYA_WHIP => "PapayaWhip", "Papaya Whip";
    PEACH_PUFF => "PeachPuff", "Peach Puff";
    PINK => "Pink", "Pink";
    SALMON => "Salmon", "Salmon";
    SEA_SHELL => "SeaShell", "Sea Shell";
    SKY_BLUE => "SkyBlue", "Sky Blue";
    SNOW => "Snow", "Snow";
    SPRING_GREEN => "SpringGreen", "Spring Green";
    STEEL_BLUE => "SteelBlue", "Steel Blue";
    TOMATO => "Tomato", "Tomato";
}
