//! Keyword tables.
//! Single byte tokens occupy 0x81 and up, extended tokens are keyed by (lead byte, next byte).
//! Gaps are deliberate, undefined codes are rendered as escapes by the decoder.

/// Byte to keyword assignments for one dialect
#[derive(Debug)]
pub struct TokenTable {
    pub single: &'static [(u8,&'static str)],
    pub extended: &'static [((u8,u8),&'static str)]
}

pub static GW_TABLE: TokenTable = TokenTable {
    single: &GW_DETOK_MAP,
    extended: &GW_EXT_DETOK_MAP
};

pub static QB_TABLE: TokenTable = TokenTable {
    single: &QB_DETOK_MAP,
    extended: &QB_EXT_DETOK_MAP
};

const GW_DETOK_MAP: [(u8,&str);109] = [
    (0x81,"END"),(0x82,"FOR"),(0x83,"NEXT"),(0x84,"DATA"),(0x85,"INPUT"),(0x86,"DIM"),(0x87,"READ"),
    (0x88,"LET"),(0x89,"GOTO"),(0x8a,"RUN"),(0x8b,"IF"),(0x8c,"RESTORE"),(0x8d,"GOSUB"),(0x8e,"RETURN"),
    (0x8f,"REM"),(0x90,"STOP"),(0x91,"PRINT"),(0x92,"CLEAR"),(0x93,"LIST"),(0x94,"NEW"),(0x95,"ON"),
    (0x96,"WAIT"),(0x97,"DEF"),(0x98,"POKE"),(0x99,"CONT"),(0x9a,"OUT"),(0x9b,"LPRINT"),(0x9c,"LLIST"),
    (0x9d,"WIDTH"),(0x9e,"ELSE"),(0x9f,"TRON"),(0xa0,"TROFF"),(0xa1,"SWAP"),(0xa2,"ERASE"),(0xa3,"EDIT"),
    (0xa4,"ERROR"),(0xa5,"RESUME"),(0xa6,"DELETE"),(0xa7,"AUTO"),(0xa8,"RENUM"),(0xa9,"DEFSTR"),
    (0xaa,"DEFINT"),(0xab,"DEFSNG"),(0xac,"DEFDBL"),(0xad,"LINE"),(0xae,"WHILE"),(0xaf,"WEND"),
    (0xb0,"CALL"),(0xb1,"WRITE"),(0xb2,"OPTION"),(0xb3,"RANDOMIZE"),(0xb4,"OPEN"),(0xb5,"CLOSE"),
    (0xb6,"LOAD"),(0xb7,"MERGE"),(0xb8,"SAVE"),(0xb9,"COLOR"),(0xba,"CLS"),(0xbb,"MOTOR"),
    (0xbc,"BSAVE"),(0xbd,"BLOAD"),(0xbe,"SOUND"),(0xbf,"BEEP"),(0xc0,"PSET"),(0xc1,"PRESET"),
    (0xc2,"SCREEN"),(0xc3,"KEY"),(0xc4,"LOCATE"),(0xc5,"TO"),(0xc6,"THEN"),(0xc7,"TAB("),(0xc8,"STEP"),
    (0xc9,"USR"),(0xca,"FN"),(0xcb,"SPC("),(0xcc,"NOT"),(0xcd,"ERL"),(0xce,"ERR"),(0xcf,"STRING$"),
    (0xd0,"USING"),(0xd1,"INSTR"),(0xd2,"'"),(0xd3,"VARPTR"),(0xd4,"CSRLIN"),(0xd5,"POINT"),
    (0xd6,"LEFT$"),(0xd7,"RIGHT$"),(0xd8,"MID$"),(0xd9,"CHR$"),(0xda,"SPACE$"),(0xdb,"HEX$"),
    (0xdc,"OCT$"),(0xdd,"LPOS"),(0xde,"STR$"),(0xdf,"VAL"),(0xe0,"LEN"),(0xe1,"SIN"),(0xe2,"COS"),
    (0xe3,"TAN"),(0xe4,"ATN"),(0xe5,"PEEK"),(0xe6,"SQR"),(0xe7,"RND"),(0xe8,"LOG"),(0xe9,"EXP"),
    (0xea,"ABS"),(0xeb,"INT"),(0xec,"FRE"),(0xed,"INKEY$")
];

const GW_EXT_DETOK_MAP: [((u8,u8),&str);17] = [
    ((0xfd,0x81),"CVI"),((0xfd,0x82),"CVS"),((0xfd,0x83),"CVD"),
    ((0xfd,0x84),"MKI$"),((0xfd,0x85),"MKS$"),((0xfd,0x86),"MKD$"),
    ((0xff,0x81),"LEFT$"),((0xff,0x82),"RIGHT$"),((0xff,0x83),"MID$"),((0xff,0x84),"SGN"),
    ((0xff,0x85),"INT"),((0xff,0x86),"ABS"),((0xff,0x87),"SQR"),((0xff,0x88),"RND"),
    ((0xff,0x89),"SIN"),((0xff,0x8a),"LOG"),((0xff,0x8b),"EXP")
];

// QuickBASIC reuses several keywords at more than one code
const QB_DETOK_MAP: [(u8,&str);117] = [
    (0x81,"END"),(0x82,"FOR"),(0x83,"NEXT"),(0x84,"DATA"),(0x85,"INPUT"),(0x86,"DIM"),
    (0x87,"READ"),(0x88,"LET"),(0x89,"GOTO"),(0x8a,"RUN"),(0x8b,"IF"),(0x8c,"RESTORE"),
    (0x8d,"GOSUB"),(0x8e,"RETURN"),(0x8f,"REM"),(0x90,"STOP"),(0x91,"PRINT"),
    (0x92,"CLEAR"),(0x93,"LIST"),(0x94,"NEW"),(0x95,"ON"),(0x96,"WAIT"),
    (0x97,"DEF"),(0x98,"POKE"),(0x99,"CONT"),(0x9a,"OUT"),(0x9b,"LPRINT"),
    (0x9c,"LLIST"),(0x9d,"WIDTH"),(0x9e,"ELSE"),(0x9f,"TRON"),(0xa0,"TROFF"),
    (0xa1,"SWAP"),(0xa2,"ERASE"),(0xa3,"ERROR"),(0xa4,"RESUME"),(0xa5,"DELETE"),
    (0xa6,"AUTO"),(0xa7,"RENUM"),(0xa8,"DEFSTR"),(0xa9,"DEFINT"),(0xaa,"DEFSNG"),
    (0xab,"DEFDBL"),(0xac,"LINE"),(0xad,"EDIT"),(0xae,"OPTION"),(0xaf,"BASE"),
    (0xb0,"MID$"),(0xb1,"CLS"),(0xb2,"LOCATE"),(0xb3,"TO"),(0xb4,"THEN"),
    (0xb5,"TAB("),(0xb6,"STEP"),(0xb7,"USING"),(0xb8,"VARPTR"),(0xb9,"USR"),
    (0xba,"ERL"),(0xbb,"FN"),(0xbc,"SPC("),(0xbd,"POINT"),(0xbe,"FRE"),
    (0xbf,"INKEY$"),(0xc0,"'"),(0xc3,"CSRLIN"),(0xc4,"POS"),(0xc5,"SYSTEM"),
    (0xc6,"LPRINT"),(0xc7,"WIDTH"),(0xcb,"VIEW"),(0xcc,"WINDOW"),(0xce,"LINE"),
    (0xcf,"PSET"),(0xd0,"PRESET"),(0xd1,"SCREEN"),(0xd2,"KEY"),(0xd3,"LOCATE"),
    (0xd4,"TO"),(0xd5,"CIRCLE"),(0xd6,"COLOR"),(0xd7,"STRING$"),(0xd8,"PAINT"),
    (0xdb,"DEF SEG"),(0xdc,"BSAVE"),(0xdd,"BLOAD"),(0xde,"SOUND"),(0xdf,"BEEP"),
    (0xe0,"PSET"),(0xe1,"DECLARE"),(0xe2,"CHAIN"),(0xe3,"FIELD"),(0xe4,"USING$"),
    (0xe5,"ERROR"),(0xe6,"RESUME"),(0xe7,"FILES"),(0xe8,"KILL"),(0xe9,"NAME"),
    (0xea,"LSET"),(0xeb,"RSET"),(0xec,"SAVE"),(0xed,"LFILES"),(0xee,"PUT"),
    (0xef,"GET"),(0xf0,"LOF"),(0xf1,"EOF"),(0xf2,"LOC"),(0xf3,"SEEK"),
    (0xf4,"OPEN"),(0xf5,"CLOSE"),(0xf6,"LOAD"),(0xf7,"MERGE"),(0xf8,"FILES"),
    (0xf9,"LSET"),(0xfa,"RSET"),(0xfb,"WIDTH"),(0xfc,"PLAY"),(0xfd,"TROFF")
];

const QB_EXT_DETOK_MAP: [((u8,u8),&str);4] = [
    ((0xff,0x03),"MOD"),((0xff,0x20),"INSTR$"),((0xff,0x60),"RND"),((0xff,0x6c),"TIMER")
];
